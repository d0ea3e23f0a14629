use async_trait::async_trait;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::RefreshToken;
use crate::domain::session::models::RefreshTokenStatus;
use crate::domain::session::ports::RefreshTokenStore;
use crate::domain::user::models::UserId;

/// Refresh token table in PostgreSQL.
///
/// Rows are keyed by token value. Nothing is cached in process.
pub struct PostgresRefreshTokenStore {
    pool: PgPool,
}

impl PostgresRefreshTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a row as-is, bypassing token generation.
    pub async fn insert(&self, refresh_token: &RefreshToken) -> Result<(), SessionError> {
        // Plain INSERT: a duplicate value must fail, never overwrite.
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $3, $4, $5)
            "#,
        )
        .bind(refresh_token.token.as_str())
        .bind(refresh_token.user_id.0)
        .bind(refresh_token.created_at)
        .bind(refresh_token.expires_at)
        .bind(refresh_token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(persistence_failure)?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct RefreshTokenRow {
    token: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        Self {
            token: row.token,
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            expires_at: row.expires_at,
            revoked_at: row.revoked_at,
        }
    }
}

fn persistence_failure(e: sqlx::Error) -> SessionError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return SessionError::PersistenceFailure(format!(
                "refresh token collision, retry login: {}",
                db_err
            ));
        }
    }
    SessionError::PersistenceFailure(e.to_string())
}

#[async_trait]
impl RefreshTokenStore for PostgresRefreshTokenStore {
    async fn create(
        &self,
        user_id: &UserId,
        lifetime: Duration,
    ) -> Result<RefreshToken, SessionError> {
        let refresh_token = RefreshToken::generate(*user_id, lifetime, Utc::now());
        self.insert(&refresh_token).await?;

        Ok(refresh_token)
    }

    async fn find_user_by_token(&self, token: &str) -> Result<UserId, SessionError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT token, user_id, created_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence_failure)?;

        let refresh_token = RefreshToken::from(row.ok_or(SessionError::UnknownToken)?);

        match refresh_token.status_at(Utc::now()) {
            RefreshTokenStatus::Active => Ok(refresh_token.user_id),
            RefreshTokenStatus::Expired => Err(SessionError::TokenExpired),
            RefreshTokenStatus::Revoked => Err(SessionError::TokenRevoked),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        let now = Utc::now();

        // COALESCE keeps the first revocation time on repeated calls.
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, $2), updated_at = $2
            WHERE token = $1
            "#,
        )
        .bind(token)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(persistence_failure)?;

        if result.rows_affected() == 0 {
            return Err(SessionError::UnknownToken);
        }

        Ok(())
    }
}
