use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedPrincipal;
use crate::domain::user::models::Authority;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::PasswordError;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;

/// Port for authentication and account operations.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first token.
    ///
    /// Nothing is persisted and no token is issued when the username is taken.
    ///
    /// # Arguments
    /// * `credentials` - Validated username and plaintext password
    ///
    /// # Returns
    /// Issued token together with the persisted user
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `Password` - Hashing failed
    /// * `Token` - Token could not be issued
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, credentials: Credentials) -> Result<IssuedToken, UserError>;

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Issued token together with the stored user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Token` - Token could not be issued
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Delete existing user. Tokens already issued stay valid until expiry.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Check whether a username is registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// Persisted user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username uniqueness violated (including concurrent signups)
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;

    /// Remove every user from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all(&self) -> Result<(), UserError>;
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a plaintext password. Two calls with the same input yield different digests.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    async fn hash(&self, password: &Password) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored digest.
    ///
    /// A malformed digest never matches.
    async fn verify(&self, password: &Password, password_hash: &str) -> bool;
}

/// Issuance and verification of signed, time-bound bearer tokens.
pub trait TokenCodec: Send + Sync + 'static {
    /// Issue a token for `subject` carrying `authorities`, valid from `now`.
    ///
    /// # Errors
    /// * `IssuingFailed` - Token encoding failed
    fn issue(
        &self,
        subject: &Username,
        authorities: &[Authority],
        now: DateTime<Utc>,
    ) -> Result<String, TokenError>;

    /// Verify a token and derive the principal it asserts.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded
    /// * `BadSignature` - Signature does not match
    /// * `Expired` - `now` is at or past the token's expiry
    fn verify(&self, token: &str, now: DateTime<Utc>)
        -> Result<AuthenticatedPrincipal, TokenError>;
}
