use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::LoginOutcome;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let outcome = state
        .session_service
        .login(Credentials::new(body.email, body.password))
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "Login rejected");
            ApiError::from(e)
        })?;

    tracing::info!(user_id = %outcome.user.id, "User logged in");

    Ok(ApiSuccess::new(StatusCode::OK, outcome.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    #[serde(flatten)]
    pub user: UserData,
    pub token: String,
    pub refresh_token: String,
}

impl From<LoginOutcome> for LoginResponseData {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: (&outcome.user).into(),
            token: outcome.tokens.access_token,
            refresh_token: outcome.tokens.refresh_token,
        }
    }
}
