use std::fmt;

/// Stored password hash in PHC string format.
///
/// Only [`PasswordHasher::hash`](super::PasswordHasher::hash) produces new
/// values; `from_persisted` re-hydrates one read back from storage.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub(crate) fn new(phc: String) -> Self {
        Self(phc)
    }

    /// Wrap a hash previously produced by the hasher and loaded from storage.
    pub fn from_persisted(phc: String) -> Self {
        Self(phc)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
