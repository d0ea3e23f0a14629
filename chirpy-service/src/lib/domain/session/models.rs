use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Lifetime of an access token.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Lifetime of a refresh token.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Email/password pair presented at login. Never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token lifetimes used by the session service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl: Duration::days(REFRESH_TOKEN_TTL_DAYS),
        }
    }
}

/// Persisted refresh token row.
///
/// Rows are never deleted; expiry is evaluated when the row is read and a
/// set `revoked_at` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// State of a refresh token at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenStatus {
    Active,
    Expired,
    Revoked,
}

impl RefreshToken {
    /// Mint a new active refresh token with a fresh random value.
    pub fn generate(user_id: UserId, lifetime: Duration, now: DateTime<Utc>) -> Self {
        Self {
            token: auth::generate_refresh_token(),
            user_id,
            created_at: now,
            expires_at: now + lifetime,
            revoked_at: None,
        }
    }

    /// Revocation wins over expiry so a logged-out session is reported as such.
    pub fn status_at(&self, now: DateTime<Utc>) -> RefreshTokenStatus {
        if self.revoked_at.is_some() {
            RefreshTokenStatus::Revoked
        } else if now > self.expires_at {
            RefreshTokenStatus::Expired
        } else {
            RefreshTokenStatus::Active
        }
    }
}

/// Tokens handed out at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub tokens: TokenPair,
}
