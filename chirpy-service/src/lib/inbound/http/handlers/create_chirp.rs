use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ChirpData;
use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::chirp::models::CreateChirpCommand;
use crate::domain::chirp::ports::ChirpServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for posting a chirp (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChirpRequest {
    body: String,
}

impl CreateChirpRequest {
    fn try_into_command(self) -> Result<CreateChirpCommand, ChirpError> {
        let body = ChirpBody::new(self.body)?;
        Ok(CreateChirpCommand::new(body))
    }
}

pub async fn create_chirp(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(req): Json<CreateChirpRequest>,
) -> Result<ApiSuccess<ChirpData>, ApiError> {
    let command = req.try_into_command()?;

    let chirp = state
        .chirp_service
        .create_chirp(&caller.user_id, command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(chirp_id = %chirp.id, user_id = %caller.user_id, "Chirp created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&chirp).into()))
}
