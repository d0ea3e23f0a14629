use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Issuer stamped on every access token and required at validation time.
pub const ACCESS_TOKEN_ISSUER: &str = "chirpy-access";

/// Claims carried by an access token.
///
/// The token is self-contained: nothing on the server backs it, so these four
/// fields are everything validation can rely on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Issuer
    pub iss: String,

    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessTokenClaims {
    /// Create claims for a user, valid from `issued_at` for `ttl`.
    pub fn for_user(user_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = issued_at + ttl;

        Self {
            iss: ACCESS_TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// A token stops being valid at the second it expires.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    pub fn has_expected_issuer(&self) -> bool {
        self.iss == ACCESS_TOKEN_ISSUER
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_user() {
        let user_id = Uuid::new_v4();
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = AccessTokenClaims::for_user(user_id, issued_at, Duration::hours(1));

        assert_eq!(claims.iss, "chirpy-access");
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
        assert!(claims.has_expected_issuer());
    }

    #[test]
    fn test_is_expired() {
        let claims = AccessTokenClaims {
            iss: ACCESS_TOKEN_ISSUER.to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_zero_ttl_is_born_expired() {
        let issued_at = Utc::now();
        let claims = AccessTokenClaims::for_user(Uuid::new_v4(), issued_at, Duration::zero());

        assert!(claims.is_expired(issued_at.timestamp()));
    }
}
