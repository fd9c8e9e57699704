use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::{types::app_state::AppState, utils::app_error::AppError};

/// Rejects requests to Maps-backed routes before the body is read when the
/// server has no API key.
pub async fn require_maps_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.maps_service.has_api_key() {
        error!("Maps API key is not configured");
        return Err(AppError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server API key not set. Add MAPS_API_KEY to the environment.",
        ));
    }

    Ok(next.run(request).await)
}
