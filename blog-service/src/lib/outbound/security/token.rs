use auth::JwtError;
use auth::JwtHandler;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedPrincipal;
use crate::domain::user::models::Authority;
use crate::domain::user::models::Username;
use crate::user::errors::TokenError;
use crate::user::ports::TokenCodec;

/// HS256 bearer tokens backed by the `auth` library.
pub struct JwtTokenCodec {
    handler: JwtHandler,
}

impl JwtTokenCodec {
    /// # Arguments
    /// * `secret` - Process-wide signing key, loaded once at startup
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            handler: JwtHandler::new(secret, ttl),
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(
        &self,
        subject: &Username,
        authorities: &[Authority],
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let authorities = authorities
            .iter()
            .map(|authority| authority.as_str().to_string())
            .collect();

        Ok(self.handler.issue(subject.as_str(), authorities, now)?)
    }

    fn verify(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedPrincipal, TokenError> {
        let claims = self.handler.verify(token, now)?;

        // Signed by us, so these only fail if the validation rules changed since issuance
        let username = Username::new(claims.sub).map_err(|_| TokenError::Malformed)?;
        let authorities = claims
            .authorities
            .into_iter()
            .map(Authority::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TokenError::Malformed)?;

        Ok(AuthenticatedPrincipal::new(username, authorities))
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(msg) => TokenError::IssuingFailed(msg),
            JwtError::Malformed(_) => TokenError::Malformed,
            JwtError::BadSignature => TokenError::BadSignature,
            JwtError::Expired => TokenError::Expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::Claims;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn codec() -> JwtTokenCodec {
        JwtTokenCodec::new(SECRET, Duration::hours(1))
    }

    fn alice() -> Username {
        Username::new("Alice".to_string()).unwrap()
    }

    #[test]
    fn test_issue_and_verify_principal() {
        let codec = codec();
        let now = Utc::now();

        let token = codec
            .issue(&alice(), &[Authority::user()], now)
            .expect("Failed to issue token");
        let principal = codec.verify(&token, now).expect("Failed to verify token");

        assert_eq!(principal.username, alice());
        assert_eq!(principal.authorities, vec![Authority::user()]);
    }

    #[test]
    fn test_verify_expired() {
        let codec = codec();
        let issued_at = Utc::now() - Duration::hours(2);

        let token = codec
            .issue(&alice(), &[Authority::user()], issued_at)
            .expect("Failed to issue token");

        assert_eq!(codec.verify(&token, Utc::now()), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_foreign_key() {
        let other = JwtTokenCodec::new(b"another-secret-key-at-least-32-bytes-long", Duration::hours(1));
        let now = Utc::now();

        let token = other
            .issue(&alice(), &[Authority::admin()], now)
            .expect("Failed to issue token");

        assert_eq!(codec().verify(&token, now), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_verify_garbage() {
        assert_eq!(
            codec().verify("garbage", Utc::now()),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_verify_rejects_invalid_subject() {
        let handler = JwtHandler::new(SECRET, Duration::hours(1));
        let now = Utc::now();
        let claims = Claims::new("not a username", vec![], now, Duration::hours(1));
        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(codec().verify(&token, now), Err(TokenError::Malformed));
    }
}
