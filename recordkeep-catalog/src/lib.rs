//! recordkeep-catalog: book catalog with a paginated, sortable JSON API

pub mod bootstrap;
pub mod models;
pub mod repo;
pub mod routes;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use recordkeep_core::{create_pool, health, run_server, AppConfig, AppState, DatabaseKind};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .merge(health::router())
        .layer(cors)
        .with_state(state)
}

/// Open the pool, create the schema and seed it.
pub async fn init(config: AppConfig) -> Result<AppState> {
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to connect to {}", DatabaseKind::from_url(&config.database_url)))?;

    bootstrap::run(&pool).await?;
    Ok(AppState::new(config, pool))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig) -> Result<()> {
    let bind_addr = config.bind_addr;
    let state = init(config).await?;
    run_server("catalog", build_router(state), bind_addr).await?;
    Ok(())
}
