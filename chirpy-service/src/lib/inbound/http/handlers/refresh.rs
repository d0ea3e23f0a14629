use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Mint a new access token from the refresh token presented as a bearer token.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .session_service
        .refresh(&headers)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "Refresh rejected");
            ApiError::from(e)
        })
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}
