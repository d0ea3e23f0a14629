use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(command.password.as_str())?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        user.email = command.email;
        user.password_hash = self.password_hasher.hash(command.password.as_str())?;
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.upgrade_to_chirpy_red(id).await
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHash;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn existing_user(id: UserId) -> User {
        let now = Utc::now();
        User {
            id,
            email: EmailAddress::new("old@example.com".to_string()).unwrap(),
            password_hash: PasswordHash::from_persisted("$argon2id$old_hash".to_string()),
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.as_str().starts_with("$argon2id")
                    && !user.is_chirpy_red
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let user = service.create_user(command).await.unwrap();
        assert_eq!(user.email.as_str(), "test@example.com");
        // Password is hashed with real Argon2
        assert!(auth::PasswordHasher::new()
            .verify("password123", &user.password_hash)
            .is_ok());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Password::new("password456".to_string()).unwrap(),
        );

        let result = service.create_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_user_success() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();

        let returned_user = existing_user(user_id);
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        repository
            .expect_update()
            .withf(|user| {
                user.email.as_str() == "new@example.com"
                    && user.password_hash.as_str().starts_with("$argon2id")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            email: EmailAddress::new("new@example.com".to_string()).unwrap(),
            password: Password::new("newpassword".to_string()).unwrap(),
        };

        let updated = service.update_user(&user_id, command).await.unwrap();
        assert_eq!(updated.email.as_str(), "new@example.com");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            email: EmailAddress::new("new@example.com".to_string()).unwrap(),
            password: Password::new("newpassword".to_string()).unwrap(),
        };

        let result = service.update_user(&UserId::new(), command).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upgrade_to_chirpy_red_not_found() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();

        repository
            .expect_upgrade_to_chirpy_red()
            .times(1)
            .returning(move |id| Err(UserError::NotFound(id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.upgrade_to_chirpy_red(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
