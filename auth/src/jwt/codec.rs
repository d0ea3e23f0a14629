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
use uuid::Uuid;

use super::claims::AccessTokenClaims;
use super::errors::TokenError;

/// Signer and verifier for access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Holds only the keys derived from the
/// secret, so one instance can be shared across any number of threads.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AccessTokenCodec {
    /// Create a codec for a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be at least 32 bytes)
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Accept the whole HMAC family so a foreign signature is reported as
        // such; the algorithm itself is checked once the signature holds.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Expiry and issuer are checked after decoding, in a fixed order.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue an access token for a user, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(user_id, ttl, Utc::now())
    }

    /// Issue an access token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = AccessTokenClaims::for_user(user_id, now, ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate an access token and return the user it was issued for.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this secret
    /// * `Malformed` - Token shape, algorithm, or claims are not as issued
    /// * `Expired` - Token lifetime has elapsed
    /// * `WrongIssuer` - Token was issued for another purpose
    /// * `InvalidSubject` - Subject is not a user identifier
    pub fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate an access token as if the current time were `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if data.header.alg != Algorithm::HS256 {
            return Err(TokenError::Malformed(format!(
                "unexpected algorithm {:?}",
                data.header.alg
            )));
        }

        let claims = data.claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        if !claims.has_expected_issuer() {
            return Err(TokenError::WrongIssuer(claims.iss));
        }

        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject(claims.sub))
    }
}
