//! Authentication primitives
//!
//! Provides the cryptographic building blocks used by the blog service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//!
//! The service defines its own ports and adapts these implementations,
//! so this crate carries no domain knowledge.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let now = Utc::now();
//! let token = handler.issue("alice", vec!["ROLE_USER".to_string()], now).unwrap();
//! let claims = handler.verify(&token, now).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
