use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::ports::ChirpRepository;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::RefreshToken;
use crate::domain::session::models::RefreshTokenStatus;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user table, for tests and throwaway runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        if users
            .values()
            .any(|existing| existing.id != user.id && existing.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn upgrade_to_chirpy_red(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(id)
            .ok_or(UserError::NotFound(id.to_string()))?;
        user.is_chirpy_red = true;
        user.updated_at = Utc::now();

        Ok(())
    }
}

/// Process-local refresh token table, for tests and throwaway runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row as-is, bypassing token generation.
    pub async fn insert(&self, refresh_token: RefreshToken) -> Result<(), SessionError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&refresh_token.token) {
            return Err(SessionError::PersistenceFailure(
                "refresh token collision, retry login".to_string(),
            ));
        }

        tokens.insert(refresh_token.token.clone(), refresh_token);
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn create(
        &self,
        user_id: &UserId,
        lifetime: Duration,
    ) -> Result<RefreshToken, SessionError> {
        let refresh_token = RefreshToken::generate(*user_id, lifetime, Utc::now());
        self.insert(refresh_token.clone()).await?;
        Ok(refresh_token)
    }

    async fn find_user_by_token(&self, token: &str) -> Result<UserId, SessionError> {
        let tokens = self.tokens.read().await;
        let refresh_token = tokens.get(token).ok_or(SessionError::UnknownToken)?;

        match refresh_token.status_at(Utc::now()) {
            RefreshTokenStatus::Active => Ok(refresh_token.user_id),
            RefreshTokenStatus::Expired => Err(SessionError::TokenExpired),
            RefreshTokenStatus::Revoked => Err(SessionError::TokenRevoked),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        let mut tokens = self.tokens.write().await;
        let refresh_token = tokens.get_mut(token).ok_or(SessionError::UnknownToken)?;

        if refresh_token.revoked_at.is_none() {
            refresh_token.revoked_at = Some(Utc::now());
        }

        Ok(())
    }
}

/// Process-local chirp table, for tests and throwaway runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChirpRepository {
    chirps: Arc<RwLock<HashMap<ChirpId, Chirp>>>,
}

impl InMemoryChirpRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, ChirpError> {
        self.chirps.write().await.insert(chirp.id, chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, ChirpError> {
        let mut chirps: Vec<Chirp> = self.chirps.read().await.values().cloned().collect();
        chirps.sort_by_key(|chirp| (chirp.created_at, chirp.id.0));
        Ok(chirps)
    }

    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpError> {
        Ok(self.chirps.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &ChirpId) -> Result<(), ChirpError> {
        self.chirps
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(ChirpError::NotFound(*id))
    }
}
