use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::chirp::errors::ChirpBodyError;
use crate::domain::chirp::errors::ChirpIdError;
use crate::domain::user::models::UserId;

/// Longest accepted chirp, in characters, measured before cleaning.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words masked out of every chirp, matched case-insensitively.
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Chirp aggregate root entity.
#[derive(Debug, Clone)]
pub struct Chirp {
    pub id: ChirpId,
    pub body: ChirpBody,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Chirp unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChirpId(pub Uuid);

impl ChirpId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a chirp ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ChirpIdError> {
        Uuid::parse_str(s)
            .map(ChirpId)
            .map_err(|e| ChirpIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ChirpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Chirp text, length-checked and with profanity masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Validate and clean a chirp body submitted by a user.
    ///
    /// # Errors
    /// * `TooLong` - Body exceeds [`MAX_CHIRP_LENGTH`] characters
    pub fn new(body: String) -> Result<Self, ChirpBodyError> {
        let length = body.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ChirpBodyError::TooLong {
                max: MAX_CHIRP_LENGTH,
                actual: length,
            });
        }

        Ok(Self(clean_profanity(&body)))
    }

    /// Wrap a body already validated and cleaned, loaded from storage.
    pub fn from_persisted(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replace every space-separated profane word with `****`.
fn clean_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Command to post a chirp as the authenticated user.
#[derive(Debug)]
pub struct CreateChirpCommand {
    pub body: ChirpBody,
}

impl CreateChirpCommand {
    pub fn new(body: ChirpBody) -> Self {
        Self { body }
    }
}
