use async_trait::async_trait;

use crate::domain::user::models::Password;
use crate::user::errors::PasswordError;
use crate::user::ports::PasswordHasher;

/// Argon2id password hashing backed by the `auth` library.
///
/// Hashing is CPU-bound and deliberately slow, so both operations run on
/// the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    hasher: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<String, PasswordError> {
        let hasher = self.hasher;
        let password = password.clone();

        tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("Task join error: {}", e)))?
            .map_err(|e| match e {
                auth::PasswordError::HashingFailed(msg) => PasswordError::HashingFailed(msg),
            })
    }

    async fn verify(&self, password: &Password, password_hash: &str) -> bool {
        let hasher = self.hasher;
        let password = password.clone();
        let password_hash = password_hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(password.expose(), &password_hash))
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                false
            })
    }
}
