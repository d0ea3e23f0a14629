use async_trait::async_trait;
use chrono::Duration;
use http::HeaderMap;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::LoginOutcome;
use crate::domain::session::models::RefreshToken;
use crate::domain::user::models::UserId;

/// Port for session operations: login, access token refresh, revocation and
/// authentication of protected requests.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials and open a session.
    ///
    /// # Returns
    /// A one-hour access token and a persisted refresh token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `PersistenceFailure` - User lookup or refresh token write failed
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, SessionError>;

    /// Mint a new access token from the refresh token in the `Authorization`
    /// header. The refresh token itself is left untouched.
    ///
    /// # Errors
    /// * `MissingAuthorization` / `WrongAuthorizationScheme` / `EmptyToken`
    /// * `UnknownToken` / `TokenExpired` / `TokenRevoked`
    /// * `PersistenceFailure` - Store lookup failed
    async fn refresh(&self, headers: &HeaderMap) -> Result<String, SessionError>;

    /// Revoke the refresh token in the `Authorization` header.
    ///
    /// # Errors
    /// * `MissingAuthorization` / `WrongAuthorizationScheme` / `EmptyToken`
    /// * `UnknownToken` - Token was never issued
    /// * `PersistenceFailure` - Store write failed
    async fn revoke(&self, headers: &HeaderMap) -> Result<(), SessionError>;

    /// Resolve the user behind the access token in the `Authorization` header.
    ///
    /// Pure computation, no store round trip.
    fn authenticate(&self, headers: &HeaderMap) -> Result<UserId, SessionError>;
}

/// Persisted lifecycle of refresh tokens.
///
/// Each call is a single round trip touching one row. Implementations never
/// retry a failed write.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync + 'static {
    /// Generate and persist a refresh token for a user.
    ///
    /// # Errors
    /// * `PersistenceFailure` - Write failed, including a duplicate token value
    async fn create(
        &self,
        user_id: &UserId,
        lifetime: Duration,
    ) -> Result<RefreshToken, SessionError>;

    /// Resolve the owner of an active refresh token.
    ///
    /// # Errors
    /// * `UnknownToken` - No row matches
    /// * `TokenExpired` - Current time is past `expires_at`
    /// * `TokenRevoked` - Token was revoked
    /// * `PersistenceFailure` - Read failed
    async fn find_user_by_token(&self, token: &str) -> Result<UserId, SessionError>;

    /// Mark a refresh token revoked. Revoking twice succeeds.
    ///
    /// # Errors
    /// * `UnknownToken` - No row matches
    /// * `PersistenceFailure` - Write failed
    async fn revoke(&self, token: &str) -> Result<(), SessionError>;
}
