pub mod errors;
pub mod extractor;

pub use errors::CredentialError;
pub use extractor::extract_api_key;
pub use extractor::extract_bearer_token;
pub use extractor::API_KEY_HEADER;
