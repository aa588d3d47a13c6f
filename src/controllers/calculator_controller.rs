use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

use crate::error::ApiError;
use crate::models::calculator::{CalculatorCatalog, EstimateRequest, EstimateResponse};
use crate::services::{formatting, solar_calculator};
use crate::shared_state::AppState;

/// GET /api/calculator/options
/// Calculator option tables
///
/// Returns the bill slider range, household usage defaults, and the catalogue of
/// system sizes, battery sizes and roof directions with their prices and multipliers.
#[utoipa::path(
    get,
    path = "/api/calculator/options",
    responses(
        (status = 200, description = "Calculator option tables", body = CalculatorCatalog)
    )
)]
pub async fn get_calculator_options() -> impl IntoResponse {
    Json(solar_calculator::catalog())
}

/// POST /api/calculator/estimate
/// Estimate solar savings
///
/// Runs the savings estimator for one set of calculator inputs and returns the full
/// result bundle together with display strings.
#[utoipa::path(
    post,
    path = "/api/calculator/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimated savings", body = EstimateResponse),
        (status = 422, description = "Inputs outside the supported range")
    )
)]
pub async fn estimate_savings(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let inputs = request.into_inputs();
    let results = state.estimate(&inputs)?;
    debug!(
        system_kw = inputs.system_size.kw(),
        battery = inputs.include_battery,
        annual_savings = results.annual_savings,
        "estimate computed"
    );
    let summary = formatting::summarize(&results);
    Ok(Json(EstimateResponse { inputs, results, summary }))
}
