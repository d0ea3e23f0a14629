use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::session::errors::SessionError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the access token and adds the user to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let user_id = state
        .session_service
        .authenticate(req.headers())
        .map_err(|e| {
            tracing::warn!(error = %e, "Access token rejected");
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Middleware that admits only callers presenting the payment provider's API key
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let api_key = auth::extract_api_key(req.headers()).map_err(|e| {
        tracing::warn!(error = %e, "Webhook called without an API key");
        ApiError::from(SessionError::from(e)).into_response()
    })?;

    if api_key.as_str() != &*state.polka_api_key {
        tracing::warn!("Webhook called with an unknown API key");
        return Err(
            ApiError::Unauthorized("You are not allowed to do this".to_string()).into_response(),
        );
    }

    Ok(next.run(req).await)
}
