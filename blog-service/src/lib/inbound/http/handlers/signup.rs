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

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = payload?;

    let credentials = body.try_into_credentials()?;

    state
        .auth_service
        .signup(credentials)
        .await
        .map_err(ApiError::from)
        .map(|issued| {
            ApiSuccess::new(
                StatusCode::CREATED,
                TokenResponseData {
                    user: (&issued.user).into(),
                    token: issued.token,
                },
            )
        })
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    username: String,
    password: String,
}

impl SignupRequestBody {
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::PasswordError;
    use crate::user::errors::UsernameError;

    fn body(username: &str, password: &str) -> SignupRequestBody {
        SignupRequestBody {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(body("Alice", "password").try_into_credentials().is_ok());

        assert!(matches!(
            body("al", "password").try_into_credentials(),
            Err(UserError::InvalidUsername(UsernameError::TooShort { .. }))
        ));
        assert!(matches!(
            body("Alice", "").try_into_credentials(),
            Err(UserError::Password(PasswordError::Empty))
        ));
    }
}
