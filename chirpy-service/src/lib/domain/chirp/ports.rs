use async_trait::async_trait;

use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::models::CreateChirpCommand;
use crate::domain::user::models::UserId;

/// Port for chirp domain service operations.
#[async_trait]
pub trait ChirpServicePort: Send + Sync + 'static {
    /// Post a chirp on behalf of a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_chirp(
        &self,
        author: &UserId,
        command: CreateChirpCommand,
    ) -> Result<Chirp, ChirpError>;

    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError>;

    /// # Errors
    /// * `NotFound` - Chirp does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, ChirpError>;

    /// Delete a chirp. Only its author may do so.
    ///
    /// # Errors
    /// * `NotFound` - Chirp does not exist
    /// * `NotOwner` - Caller is not the author
    /// * `DatabaseError` - Database operation failed
    async fn delete_chirp(&self, caller: &UserId, id: &ChirpId) -> Result<(), ChirpError>;
}

/// Persistence operations for chirp aggregate.
#[async_trait]
pub trait ChirpRepository: Send + Sync + 'static {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError>;

    /// Every stored chirp ordered by creation time, oldest first.
    async fn list(&self) -> Result<Vec<Chirp>, ChirpError>;

    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError>;

    /// # Errors
    /// * `NotFound` - No chirp with this id
    async fn delete(&self, id: &ChirpId) -> Result<(), ChirpError>;
}
