use thiserror::Error;

/// Error type for reading credentials out of request headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Missing Authorization header")]
    MissingAuthorization,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    WrongAuthorizationScheme,

    #[error("Authorization header carries an empty token")]
    EmptyToken,

    #[error("Missing API key header")]
    MissingApiKey,
}
