use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state
        .session_service
        .revoke(&headers)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "Revoke rejected");
            ApiError::from(e)
        })?;

    Ok(StatusCode::NO_CONTENT)
}
