use auth::CredentialError;
use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Every way a session operation can fail.
///
/// Closed set: callers match on the kind. `InvalidCredentials` covers both an
/// unknown email and a wrong password; all other kinds are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    HashingFailure(String),

    #[error("Missing Authorization header")]
    MissingAuthorization,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    WrongAuthorizationScheme,

    #[error("Authorization header carries an empty token")]
    EmptyToken,

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Access token is malformed: {0}")]
    Malformed(String),

    #[error("Access token signature is invalid")]
    InvalidSignature,

    #[error("Access token is expired")]
    Expired,

    #[error("Access token issuer is not accepted: {0}")]
    WrongIssuer(String),

    #[error("Access token subject is invalid: {0}")]
    InvalidSubject(String),

    #[error("Refresh token is unknown")]
    UnknownToken,

    #[error("Refresh token is expired")]
    TokenExpired,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

impl SessionError {
    /// Whether the caller should send the user back through login.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            SessionError::Expired | SessionError::TokenExpired | SessionError::TokenRevoked
        )
    }
}

impl From<CredentialError> for SessionError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::MissingAuthorization => SessionError::MissingAuthorization,
            CredentialError::WrongAuthorizationScheme => SessionError::WrongAuthorizationScheme,
            CredentialError::EmptyToken => SessionError::EmptyToken,
            CredentialError::MissingApiKey => SessionError::MissingApiKey,
        }
    }
}

impl From<TokenError> for SessionError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::EncodingFailed(msg) => SessionError::Malformed(msg),
            TokenError::InvalidSignature => SessionError::InvalidSignature,
            TokenError::Malformed(msg) => SessionError::Malformed(msg),
            TokenError::Expired => SessionError::Expired,
            TokenError::WrongIssuer(iss) => SessionError::WrongIssuer(iss),
            TokenError::InvalidSubject(sub) => SessionError::InvalidSubject(sub),
        }
    }
}

impl From<PasswordError> for SessionError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::HashingFailed(msg) => SessionError::HashingFailure(msg),
            PasswordError::Mismatch => SessionError::InvalidCredentials,
        }
    }
}

/// User lookups only fail on infrastructure problems.
impl From<UserError> for SessionError {
    fn from(err: UserError) -> Self {
        SessionError::PersistenceFailure(err.to_string())
    }
}
