use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Payment provider callback. Only `user.upgraded` has an effect; other events
/// are acknowledged and ignored. The API key is checked by the route layer.
pub async fn polka_webhooks(
    State(state): State<AppState>,
    Json(body): Json<PolkaWebhookRequest>,
) -> Result<StatusCode, ApiError> {
    if body.event != USER_UPGRADED_EVENT {
        tracing::debug!(event = %body.event, "Ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = UserId::from_string(&body.data.user_id).map_err(UserError::from)?;

    state
        .user_service
        .upgrade_to_chirpy_red(&user_id)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(user_id = %user_id, "User upgraded to Chirpy Red");

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    pub data: PolkaWebhookData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: String,
}
