use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ChirpData;
use crate::domain::chirp::ports::ChirpServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ChirpData>>, ApiError> {
    state
        .chirp_service
        .list_chirps()
        .await
        .map_err(ApiError::from)
        .map(|chirps| {
            let chirp_data: Vec<ChirpData> = chirps.iter().map(|c| c.into()).collect();
            ApiSuccess::new(StatusCode::OK, chirp_data)
        })
}
