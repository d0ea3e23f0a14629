use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

/// Entropy of a refresh token, in bytes.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token.
///
/// 256 bits from the OS random number generator, hex-encoded. The value has
/// no embedded structure and is only meaningful to the store that persists it.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
