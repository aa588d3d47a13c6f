use axum::{
    routing::{get, post},
    Router,
};
use crate::controllers::{
    // Calculator
    calculator_controller::{estimate_savings, get_calculator_options},
    // Chat widget & lead capture
    chat_controller::post_chat_message,
    lead_controller::submit_lead,
    // Service
    system_controller::get_health,
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
/// Handlers extract `State<AppState>` and/or `State<Config>` via
/// `FromRef<SharedState>`, so a single `.with_state(shared)` covers both.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/health",               get(get_health))
        .route("/calculator/options",   get(get_calculator_options))
        .route("/calculator/estimate",  post(estimate_savings))
        .route("/chat",                 post(post_chat_message))
        .route("/leads",                post(submit_lead))
        .with_state(shared)
}
