use crate::AppState;
use axum::{extract::State, http::StatusCode};
use log::error;

/// Returns "OK" while the service can reach its database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String),
        (status = 503, description = "Database unreachable", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(err) => {
            error!("Database ping failed: {err}");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
