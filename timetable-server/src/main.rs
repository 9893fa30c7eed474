use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable_server::config::ServerConfig;
use timetable_server::engine::QueryEngine;
use timetable_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timetable_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %config.socket_addr(),
        schedule = %config.schedule_path.display(),
        stops = %config.stops_path.display(),
        "Configuration loaded"
    );

    // Both sheets are read once; the engine is immutable afterwards
    let engine = match QueryEngine::load(&config.schedule_path, &config.stops_path) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "Failed to load timetable");
            return ExitCode::FAILURE;
        }
    };

    info!(
        rows = engine.schedule().len(),
        stops = engine.stops().len(),
        "Timetable loaded"
    );

    let state = AppState::new(engine);
    let app = create_router(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Bus timetable listening on http://{addr}");
    info!("  GET  /                - Search page");
    info!("  GET  /api/departures  - Departures by stop name");
    info!("  GET  /api/nearest     - Departures at the nearest stop");
    info!("  GET  /health          - Health check");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
