use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostResponseData;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostBody;
use crate::domain::post::models::PostTitle;
use crate::domain::user::models::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    payload: Result<Json<CreatePostRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .post_service
        .create_post(&principal, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for creating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequestBody {
    title: String,
    body: String,
}

impl CreatePostRequestBody {
    fn try_into_command(self) -> Result<CreatePostCommand, PostError> {
        let title = PostTitle::new(self.title)?;
        let body = PostBody::new(self.body)?;
        Ok(CreatePostCommand::new(title, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::errors::PostBodyError;
    use crate::domain::post::errors::PostTitleError;

    #[test]
    fn test_request_validation() {
        let valid = CreatePostRequestBody {
            title: "Third".to_string(),
            body: "Hello yet again.".to_string(),
        };
        let command = valid.try_into_command().expect("Valid request rejected");
        assert_eq!(command.title.as_str(), "Third");

        let no_title = CreatePostRequestBody {
            title: "  ".to_string(),
            body: "Hello".to_string(),
        };
        assert!(matches!(
            no_title.try_into_command(),
            Err(PostError::InvalidTitle(PostTitleError::Empty))
        ));

        let no_body = CreatePostRequestBody {
            title: "Title".to_string(),
            body: String::new(),
        };
        assert!(matches!(
            no_body.try_into_command(),
            Err(PostError::InvalidBody(PostBodyError::Empty))
        ));
    }
}
