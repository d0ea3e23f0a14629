use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash as PhcHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;
use super::hash::PasswordHash;

/// Memory cost in KiB.
const MEMORY_COST_KIB: u32 = 19 * 1024;
/// Number of passes over memory.
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Longest password accepted for hashing, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 1024;

/// Password hashing implementation.
///
/// Argon2id with a fixed work factor, so verification cost stays bounded
/// regardless of library defaults.
///
/// Hashes are Argon2id PHC strings. bcrypt hashes (`$2a$`/`$2b$`, cost 10)
/// written by earlier deployments are not accepted and fail verification as
/// `Mismatch`; those users have to set a new password.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Input too long or the primitive rejected it
    pub fn hash(&self, password: &str) -> Result<PasswordHash, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::HashingFailed(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let salt = SaltString::generate(&mut OsRng);

        argon2_id()
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| PasswordHash::new(hash.to_string()))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Errors
    /// * `Mismatch` - Empty password, malformed hash, or wrong password
    pub fn verify(&self, password: &str, hash: &PasswordHash) -> Result<(), PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Mismatch);
        }

        let parsed_hash = PhcHash::new(hash.as_str()).map_err(|_| PasswordError::Mismatch)?;

        // Parameters are read back from the PHC string, not from this instance.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| PasswordError::Mismatch)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn argon2_id() -> Result<Argon2<'static>, argon2::Error> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "correctPassword123!";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify(password, &hash).is_ok());
        assert_eq!(
            hasher.verify("wrongPassword", &hash),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_pins_work_factor() {
        let hash = PasswordHasher::new().hash("secret1").unwrap();
        assert!(hash.as_str().contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).is_ok());
        assert!(hasher.verify("secret1", &second).is_ok());
    }

    #[test]
    fn test_password_does_not_match_other_hash() {
        let hasher = PasswordHasher::new();
        let other = hasher.hash("anotherPassword456!").unwrap();

        assert_eq!(
            hasher.verify("correctPassword123!", &other),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_verify_empty_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correctPassword123!").unwrap();

        assert_eq!(hasher.verify("", &hash), Err(PasswordError::Mismatch));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let hash = PasswordHash::from_persisted("invalidhash".to_string());

        assert_eq!(hasher.verify("password", &hash), Err(PasswordError::Mismatch));
    }

    #[test]
    fn test_verify_bcrypt_hash_is_mismatch() {
        let hasher = PasswordHasher::new();
        let hash = PasswordHash::from_persisted(
            "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".to_string(),
        );

        assert_eq!(hasher.verify("password", &hash), Err(PasswordError::Mismatch));
    }

    #[test]
    fn test_hash_rejects_oversized_password() {
        let hasher = PasswordHasher::new();
        let password = "a".repeat(MAX_PASSWORD_BYTES + 1);

        assert!(matches!(
            hasher.hash(&password),
            Err(PasswordError::HashingFailed(_))
        ));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let hash = PasswordHasher::new().hash("secret1").unwrap();
        assert_eq!(format!("{:?}", hash), "PasswordHash(<redacted>)");
    }
}
