//! recordkeep-inventory: product inventory with HTML forms

pub mod bootstrap;
pub mod models;
pub mod repo;
pub mod routes;
pub mod views;

use anyhow::{Context, Result};
use axum::Router;

use recordkeep_core::{create_pool, health, run_server, AppConfig, AppState, DatabaseKind};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .merge(health::router())
        .with_state(state)
}

/// Open the pool, create the schema and seed it.
pub async fn init(config: AppConfig) -> Result<AppState> {
    let kind = DatabaseKind::from_url(&config.database_url);
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to connect to {}", kind))?;

    bootstrap::run(&pool).await?;
    tracing::info!(database = %kind, "connected to database");
    Ok(AppState::new(config, pool))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig) -> Result<()> {
    let bind_addr = config.bind_addr;
    let state = init(config).await?;
    run_server("inventory", build_router(state), bind_addr).await?;
    Ok(())
}
