use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_post;
pub mod delete_user;
pub mod get_post;
pub mod get_user;
pub mod list_posts;
pub mod login;
pub mod signup;

/// Successful response: status code plus the bare JSON payload.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameTaken(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidAuthority(_)
            | UserError::Password(crate::user::errors::PasswordError::Empty) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::Token(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) | PostError::UserNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            PostError::InvalidPostId(_) | PostError::InvalidTitle(_) | PostError::InvalidBody(_) => {
                ApiError::BadRequest(err.to_string())
            }
            PostError::DatabaseError(_) | PostError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
        }
    }
}

/// Token response shared by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponseData {
    pub id: String,
    pub title: String,
    pub body: String,
    pub user_id: String,
}

impl From<&Post> for PostResponseData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_string(),
            body: post.body.as_str().to_string(),
            user_id: post.user_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::errors::PostTitleError;
    use crate::user::errors::PasswordError;
    use crate::user::errors::TokenError;

    #[test]
    fn test_user_error_status_mapping() {
        let cases = [
            (UserError::UsernameTaken("alice".into()), StatusCode::CONFLICT),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (UserError::NotFound("id".into()), StatusCode::NOT_FOUND),
            (UserError::Forbidden("ROLE_ADMIN".into()), StatusCode::FORBIDDEN),
            (
                UserError::Password(PasswordError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::Password(PasswordError::HashingFailed("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::Token(TokenError::IssuingFailed("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::DatabaseError("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_post_error_status_mapping() {
        assert_eq!(
            ApiError::from(PostError::InvalidTitle(PostTitleError::Empty))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(PostError::UserNotFound("alice".into()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_post_response_uses_camel_case() {
        let data = PostResponseData {
            id: "1".into(),
            title: "First".into(),
            body: "Hello".into(),
            user_id: "42".into(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["userId"], "42");
        assert!(json.get("user_id").is_none());
    }
}
