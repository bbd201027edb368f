use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use itinerary_server::config::{Cli, ServerConfig};
use itinerary_server::itinerary::ItineraryService;
use itinerary_server::logging;
use itinerary_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match ServerConfig::load(&cli.env_file) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Build app state
    let service = ItineraryService::new(config.itinerary.clone());
    let settings = service.config().clone();
    let state = AppState::new(service);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %addr,
        start_selection = %settings.start_selection,
        detector = %settings.detector,
        max_fallback_segments = settings.max_fallback_segments,
        "Flight itinerary server listening"
    );
    info!("  GET  /           - Server status");
    info!("  GET  /health     - Health check");
    info!("  POST /calculate  - Journey start and end");
    info!("  POST /itinerary  - Full itinerary");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
