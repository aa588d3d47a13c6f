use std::net::SocketAddr;

use solar_savings_site::build_router;
use solar_savings_site::config::Config;
use solar_savings_site::services::lead_service::LeadClient;
use solar_savings_site::shared_state::AppState;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SOLAR_SITE_CONFIG";

fn init_tracing() {
    let default_level = if cfg!(feature = "verbose_log") { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    // 1. Load configuration
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "config.json".to_string());
    let config = match Config::load(&path) {
        Ok(c) => c,
        Err(e) => {
            error!(path = %path, error = %e, "failed to load configuration");
            return;
        }
    };
    info!(path = %path, "configuration loaded");

    // 2. Lead webhook client
    let leads = match LeadClient::new(&config.webhook) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build lead webhook client");
            return;
        }
    };
    if !leads.is_configured() {
        warn!("no lead webhook configured; lead submissions will be refused");
    }

    // 3. Start Axum HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let app = build_router(config, AppState::new(leads));

    info!("Site listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        error!(error = %e, "server stopped");
    }
}
