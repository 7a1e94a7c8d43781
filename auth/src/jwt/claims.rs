use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Carries the subject, the authorities granted to it at issuance time, and
/// the validity window as Unix timestamps (seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Granted authorities (role strings)
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims valid from `issued_at` for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued for
    /// * `authorities` - Role strings granted to the subject
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Validity window
    pub fn new(
        subject: impl ToString,
        authorities: Vec<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            authorities,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Check if token is expired. A token is no longer valid at its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
