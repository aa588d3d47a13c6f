pub mod api_docs;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod shared_state;

use axum::{
    http::{header, HeaderValue, Method},
    response::Html,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::api_routes::api_routes;
use crate::shared_state::{AppState, SharedState};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Full site router: JSON API under `/api`, API reference at `/scalar`,
/// static site assets for everything else.
pub fn build_router(config: Config, state: AppState) -> Router {
    let static_dir = config.server.static_dir.clone();
    let cors = cors_layer(&config.cors_origins);
    let shared = SharedState { app: state, config };

    Router::new()
        .nest("/api", api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
