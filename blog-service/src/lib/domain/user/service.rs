use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::Authority;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthenticationServicePort;
use crate::user::ports::PasswordHasher;
use crate::user::ports::TokenCodec;
use crate::user::ports::UserRepository;

/// Argon2id digest of a throwaway password, checked when the username is
/// unknown so both login failures cost one full hash verification.
pub const UNKNOWN_USER_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$YmxvZ3NlcnZpY2VkdW1teQ$beZtG+PX0fDTwIFGroARyQyZkK8VPST9F5XJZqyjc1M";

/// Domain service implementation for signup, login and account lookups.
///
/// Concrete implementation of AuthenticationServicePort with dependency injection.
pub struct AuthenticationService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TC: TokenCodec,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
    token_codec: Arc<TC>,
}

impl<UR, PH, TC> AuthenticationService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TC: TokenCodec,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Password hashing implementation
    /// * `token_codec` - Bearer token implementation
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>, token_codec: Arc<TC>) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, UserError> {
        let token = self
            .token_codec
            .issue(&user.username, &user.authorities(), Utc::now())?;
        Ok(token)
    }
}

#[async_trait]
impl<UR, PH, TC> AuthenticationServicePort for AuthenticationService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TC: TokenCodec,
{
    async fn signup(&self, credentials: Credentials) -> Result<IssuedToken, UserError> {
        let Credentials { username, password } = credentials;

        if self.repository.exists_by_username(&username).await? {
            tracing::info!(username = %username, "Signup rejected: username taken");
            return Err(UserError::UsernameTaken(username.to_string()));
        }

        let password_hash = self.password_hasher.hash(&password).await?;

        let user = User {
            id: UserId::new(),
            username,
            password_hash,
            authority: Authority::user(),
            created_at: Utc::now(),
        };

        // A concurrent signup for the same name surfaces here as UsernameTaken
        let user = self.repository.save(user).await?;
        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User signed up");

        Ok(IssuedToken { token, user })
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, UserError> {
        let user = match self
            .repository
            .find_by_username(&credentials.username)
            .await?
        {
            Some(user) => user,
            None => {
                self.password_hasher
                    .verify(&credentials.password, UNKNOWN_USER_PASSWORD_HASH)
                    .await;
                tracing::warn!(username = %credentials.username, "Login failed: unknown user");
                return Err(UserError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .await
        {
            tracing::warn!(username = %user.username, "Login failed: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(IssuedToken { token, user })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
