use thiserror::Error;

/// Error type for password operations.
///
/// Verification deliberately reports a single `Mismatch` kind whether the
/// password was wrong, empty, or the stored hash could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password does not match")]
    Mismatch,
}
