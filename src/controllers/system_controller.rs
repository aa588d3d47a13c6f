use axum::{extract::State, response::IntoResponse, Json};

use crate::config::Config;
use crate::models::system::HealthStatus;
use crate::shared_state::AppState;

/// GET /api/health
/// Service health
///
/// Reports version, uptime and whether leads can currently be forwarded.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn get_health(
    State(state): State<AppState>,
    State(config): State<Config>,
) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        lead_capture_enabled: state.leads.is_configured(),
        lead_timeout_ms: config.webhook.timeout_ms,
    })
}
