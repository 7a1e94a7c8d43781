use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = payload?;

    // A username that could never have been registered is just another wrong login
    let credentials = body
        .try_into_credentials()
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    state
        .auth_service
        .login(credentials)
        .await
        .map_err(ApiError::from)
        .map(|issued| {
            ApiSuccess::new(
                StatusCode::OK,
                TokenResponseData {
                    user: (&issued.user).into(),
                    token: issued.token,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

impl LoginRequestBody {
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(username, password))
    }
}
