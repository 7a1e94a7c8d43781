use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PostResponseData;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::domain::user::models::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;

    state
        .post_service
        .get_post(&principal, &post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
