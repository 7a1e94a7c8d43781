use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for issuing and verifying bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). The secret and the token lifetime are
/// fixed at construction; the handler holds no other state and is safe to
/// share between requests.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for `subject`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `authorities` - Role strings granted to the subject
    /// * `now` - Issuance instant; expiry is `now + ttl`
    ///
    /// # Returns
    /// Compact, URL-safe JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        authorities: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(subject, authorities, now, self.ttl);
        self.encode(&claims)
    }

    /// Encode arbitrary claims with this handler's key.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Structure is checked first, then the signature (constant-time HMAC
    /// comparison), then expiry against `now`.
    ///
    /// # Arguments
    /// * `token` - JWT token string
    /// * `now` - Verification instant
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded
    /// * `BadSignature` - Signature does not match or algorithm differs
    /// * `Expired` - `now` is at or past the encoded expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock below
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::BadSignature
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}
