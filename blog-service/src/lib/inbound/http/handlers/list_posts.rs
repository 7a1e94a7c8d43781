use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PostResponseData;
use crate::domain::user::models::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
) -> Result<ApiSuccess<Vec<PostResponseData>>, ApiError> {
    state
        .post_service
        .list_posts(&principal)
        .await
        .map_err(ApiError::from)
        .map(|posts| ApiSuccess::new(StatusCode::OK, posts.iter().map(Into::into).collect()))
}
