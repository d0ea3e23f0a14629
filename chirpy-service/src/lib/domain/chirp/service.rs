use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::ChirpError;
use super::models::Chirp;
use super::models::ChirpId;
use super::models::CreateChirpCommand;
use super::ports::ChirpRepository;
use super::ports::ChirpServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for chirp operations.
pub struct ChirpService<CR>
where
    CR: ChirpRepository,
{
    repository: Arc<CR>,
}

impl<CR> ChirpService<CR>
where
    CR: ChirpRepository,
{
    /// Create a new chirp service.
    ///
    /// # Arguments
    /// * `repository` - Chirp persistence implementation
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ChirpServicePort for ChirpService<CR>
where
    CR: ChirpRepository,
{
    async fn create_chirp(
        &self,
        author: &UserId,
        command: CreateChirpCommand,
    ) -> Result<Chirp, ChirpError> {
        let now = Utc::now();
        let chirp = Chirp {
            id: ChirpId::new(),
            body: command.body,
            user_id: *author,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(chirp).await
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError> {
        self.repository.list().await
    }

    async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, ChirpError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ChirpError::NotFound(*id))
    }

    async fn delete_chirp(&self, caller: &UserId, id: &ChirpId) -> Result<(), ChirpError> {
        let chirp = self.get_chirp(id).await?;

        if chirp.user_id != *caller {
            return Err(ChirpError::NotOwner(*id));
        }

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::chirp::models::ChirpBody;

    mock! {
        pub TestChirpRepository {}

        #[async_trait]
        impl ChirpRepository for TestChirpRepository {
            async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError>;
            async fn list(&self) -> Result<Vec<Chirp>, ChirpError>;
            async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError>;
            async fn delete(&self, id: &ChirpId) -> Result<(), ChirpError>;
        }
    }

    fn chirp_by(author: UserId) -> Chirp {
        let now = Utc::now();
        Chirp {
            id: ChirpId::new(),
            body: ChirpBody::from_persisted("hello".to_string()),
            user_id: author,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_chirp_sets_author() {
        let mut repository = MockTestChirpRepository::new();
        let author = UserId::new();

        repository
            .expect_create()
            .withf(move |chirp| chirp.user_id == author && chirp.body.as_str() == "hello ****")
            .times(1)
            .returning(|chirp| Ok(chirp));

        let service = ChirpService::new(Arc::new(repository));
        let command =
            CreateChirpCommand::new(ChirpBody::new("hello kerfuffle".to_string()).unwrap());

        let chirp = service.create_chirp(&author, command).await.unwrap();
        assert_eq!(chirp.user_id, author);
        assert_eq!(chirp.created_at, chirp.updated_at);
    }

    #[tokio::test]
    async fn test_get_chirp_not_found() {
        let mut repository = MockTestChirpRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ChirpService::new(Arc::new(repository));

        let result = service.get_chirp(&ChirpId::new()).await;
        assert!(matches!(result, Err(ChirpError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_own_chirp() {
        let mut repository = MockTestChirpRepository::new();
        let author = UserId::new();
        let chirp = chirp_by(author);
        let chirp_id = chirp.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == chirp_id)
            .times(1)
            .returning(move |_| Ok(Some(chirp.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == chirp_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = ChirpService::new(Arc::new(repository));

        assert!(service.delete_chirp(&author, &chirp_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_other_users_chirp_is_refused() {
        let mut repository = MockTestChirpRepository::new();
        let chirp = chirp_by(UserId::new());
        let chirp_id = chirp.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(chirp.clone())));
        repository.expect_delete().times(0);

        let service = ChirpService::new(Arc::new(repository));

        let result = service.delete_chirp(&UserId::new(), &chirp_id).await;
        assert!(matches!(result, Err(ChirpError::NotOwner(id)) if id == chirp_id));
    }

    #[tokio::test]
    async fn test_delete_missing_chirp() {
        let mut repository = MockTestChirpRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = ChirpService::new(Arc::new(repository));

        let result = service.delete_chirp(&UserId::new(), &ChirpId::new()).await;
        assert!(matches!(result, Err(ChirpError::NotFound(_))));
    }
}
