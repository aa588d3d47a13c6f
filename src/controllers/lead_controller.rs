use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::lead::{LeadAccepted, LeadSubmission};
use crate::shared_state::AppState;

/// POST /api/leads
/// Submit a lead
///
/// Validates the contact details and forwards them once to the marketing webhook.
/// Delivery failures are reported with a generic retry message.
#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = LeadSubmission,
    responses(
        (status = 202, description = "Lead forwarded", body = LeadAccepted),
        (status = 422, description = "Invalid contact details"),
        (status = 502, description = "Webhook rejected or unreachable"),
        (status = 503, description = "Lead capture not configured"),
        (status = 504, description = "Webhook timed out")
    )
)]
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<LeadAccepted>), ApiError> {
    let lead_id = state.leads.submit(&lead).await?;
    Ok((StatusCode::ACCEPTED, Json(LeadAccepted { lead_id })))
}
