use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::chirp::models::ChirpId;
use crate::domain::chirp::ports::ChirpServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Only the author may delete a chirp; anyone else gets 403.
pub async fn delete_chirp(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let chirp_id =
        ChirpId::from_string(&chirp_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .chirp_service
        .delete_chirp(&caller.user_id, &chirp_id)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, chirp_id = %chirp_id, "Chirp deletion rejected");
            ApiError::from(e)
        })?;

    tracing::info!(chirp_id = %chirp_id, user_id = %caller.user_id, "Chirp deleted");

    Ok(StatusCode::NO_CONTENT)
}
