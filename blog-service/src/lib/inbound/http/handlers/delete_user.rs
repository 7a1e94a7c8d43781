use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::models::AuthenticatedPrincipal;
use crate::domain::user::models::Authority;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Admin-only account removal. Tokens already issued to the user stay valid.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !principal.has_authority(Authority::ROLE_ADMIN) {
        tracing::warn!(
            username = %principal.username,
            required = Authority::ROLE_ADMIN,
            "Delete user denied"
        );
        return Err(UserError::Forbidden(Authority::ROLE_ADMIN.to_string()).into());
    }

    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    state
        .auth_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
