use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessTokenCodec;
use auth::PasswordHasher;
use http::HeaderMap;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::LoginOutcome;
use crate::domain::session::models::SessionSettings;
use crate::domain::session::models::TokenPair;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Orchestrates password verification, access token issuance and the refresh
/// token lifecycle. Holds no mutable state of its own.
pub struct AuthSessionService<UR, RS>
where
    UR: UserRepository,
    RS: RefreshTokenStore,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RS>,
    codec: AccessTokenCodec,
    password_hasher: PasswordHasher,
    settings: SessionSettings,
}

impl<UR, RS> AuthSessionService<UR, RS>
where
    UR: UserRepository,
    RS: RefreshTokenStore,
{
    /// Create a session service.
    ///
    /// # Arguments
    /// * `users` - Lookup of accounts by email
    /// * `refresh_tokens` - Refresh token persistence
    /// * `secret` - Access token signing secret
    /// * `settings` - Token lifetimes
    pub fn new(
        users: Arc<UR>,
        refresh_tokens: Arc<RS>,
        secret: &[u8],
        settings: SessionSettings,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            codec: AccessTokenCodec::new(secret),
            password_hasher: PasswordHasher::new(),
            settings,
        }
    }

    async fn find_login_user(&self, email: &str) -> Result<User, SessionError> {
        let email = EmailAddress::new(email.to_string())
            .map_err(|_| SessionError::InvalidCredentials)?;

        self.users
            .find_by_email(&email)
            .await?
            .ok_or(SessionError::InvalidCredentials)
    }

    fn issue_access_token(&self, user_id: &UserId) -> Result<String, SessionError> {
        Ok(self
            .codec
            .issue(user_id.0, self.settings.access_token_ttl)?)
    }
}

#[async_trait]
impl<UR, RS> SessionServicePort for AuthSessionService<UR, RS>
where
    UR: UserRepository,
    RS: RefreshTokenStore,
{
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, SessionError> {
        let user = self.find_login_user(&credentials.email).await?;

        self.password_hasher
            .verify(&credentials.password, &user.password_hash)?;

        let access_token = self.issue_access_token(&user.id)?;
        let refresh_token = self
            .refresh_tokens
            .create(&user.id, self.settings.refresh_token_ttl)
            .await?;

        Ok(LoginOutcome {
            user,
            tokens: TokenPair {
                access_token,
                refresh_token: refresh_token.token,
            },
        })
    }

    async fn refresh(&self, headers: &HeaderMap) -> Result<String, SessionError> {
        let token = auth::extract_bearer_token(headers)?;
        let user_id = self.refresh_tokens.find_user_by_token(&token).await?;

        self.issue_access_token(&user_id)
    }

    async fn revoke(&self, headers: &HeaderMap) -> Result<(), SessionError> {
        let token = auth::extract_bearer_token(headers)?;
        self.refresh_tokens.revoke(&token).await
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<UserId, SessionError> {
        let token = auth::extract_bearer_token(headers)?;
        let user_id = self.codec.validate(&token)?;

        Ok(UserId(user_id))
    }
}
