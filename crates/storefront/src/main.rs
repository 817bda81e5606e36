use resource_actor::tracing::setup_tracing;
use storefront::config::Config;
use storefront::http::{self, AppState};
use storefront::lifecycle::StoreSystem;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Initializing actors...");
    let system = StoreSystem::new();

    let config = Config::load();
    let state = AppState::new(&system, config);

    info!("Starting server...");
    if let Err(e) = http::serve(state).await {
        error!(error = %e, "Server error");
    }

    // The server has released its clients; let the actors drain and stop.
    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }
}
