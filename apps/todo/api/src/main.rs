use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Metrics recorder installation failed: {}", e))?;

    let db = database::sqlite::connect_with_retry(&config.database, None)
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    database::sqlite::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.ui_urls,
        state.config.swagger_enabled,
    )?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the database
    // - /metrics: Prometheus exposition
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ops_router(state.clone()));

    info!("Starting todo API with graceful shutdown (30s timeout)");

    let server_config = state.config.server;
    let db = state.db;
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(()) => info!("SQLite connection closed successfully"),
            Err(e) => tracing::error!("Error closing SQLite: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
