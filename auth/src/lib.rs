//! Credential primitives for the Chirpy API
//!
//! Pure, synchronous building blocks with no shared mutable state:
//! - Password hashing (Argon2id)
//! - Access token issuance and validation (HS256 JWT)
//! - Bearer token and API key extraction from request headers
//! - Opaque refresh token generation
//!
//! Nothing here performs I/O, logs, or reads configuration. Secrets and
//! lifetimes are passed in by the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::AccessTokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = AccessTokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//! let token = codec.issue(user_id, Duration::hours(1)).unwrap();
//! assert_eq!(codec.validate(&token).unwrap(), user_id);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::extract_bearer_token;
//! use http::header::AUTHORIZATION;
//! use http::HeaderMap;
//! use http::HeaderValue;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
//! assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
//! ```

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod refresh;

// Re-export commonly used items
pub use credentials::extract_api_key;
pub use credentials::extract_bearer_token;
pub use credentials::CredentialError;
pub use credentials::API_KEY_HEADER;
pub use jwt::AccessTokenClaims;
pub use jwt::AccessTokenCodec;
pub use jwt::TokenError;
pub use jwt::ACCESS_TOKEN_ISSUER;
pub use password::PasswordError;
pub use password::PasswordHash;
pub use password::PasswordHasher;
pub use refresh::generate_refresh_token;
