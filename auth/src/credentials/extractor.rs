use http::header::AUTHORIZATION;
use http::HeaderMap;

use super::errors::CredentialError;

const BEARER_PREFIX: &str = "Bearer ";

/// Header carrying the webhook API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Read the bearer token from the `Authorization` header.
///
/// The scheme must be exactly `Bearer ` (case-sensitive). Surrounding
/// whitespace around the token is trimmed.
///
/// # Errors
/// * `MissingAuthorization` - Header absent or empty
/// * `WrongAuthorizationScheme` - Header does not start with `Bearer `
/// * `EmptyToken` - Nothing left after the scheme
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, CredentialError> {
    let value = headers
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(CredentialError::MissingAuthorization)?;

    let value = value
        .to_str()
        .map_err(|_| CredentialError::WrongAuthorizationScheme)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(CredentialError::WrongAuthorizationScheme)?
        .trim();

    if token.is_empty() {
        return Err(CredentialError::EmptyToken);
    }

    Ok(token.to_string())
}

/// Read the webhook API key from its dedicated header.
///
/// # Errors
/// * `MissingApiKey` - Header absent, blank, or not valid text
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, CredentialError> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(CredentialError::MissingApiKey)
}
