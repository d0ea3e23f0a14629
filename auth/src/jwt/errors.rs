use thiserror::Error;

/// Error type for access token operations.
///
/// Variants are ordered the way validation reports them: structural problems
/// before semantic ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token issuer is not accepted: {0}")]
    WrongIssuer(String),

    #[error("Token subject is not a user identifier: {0}")]
    InvalidSubject(String),
}
