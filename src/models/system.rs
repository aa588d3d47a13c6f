use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub lead_capture_enabled: bool,
    /// Client-side timeout applied to webhook deliveries
    pub lead_timeout_ms: u64,
}
