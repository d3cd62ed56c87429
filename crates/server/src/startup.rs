use axum::Router;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router with the default middleware stack.
pub fn app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn bind(server: &ServerConfig) -> anyhow::Result<tokio::net::TcpListener> {
    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

/// Public entry: connect the store, apply migrations, and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::migrate(&db).await.map_err(|e| StartupError::Database(e.to_string()))?;
    info!(event = "migrations_applied", "database schema up to date");

    let app = app(AppState::seaorm(db));

    let listener = bind(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app).await?;
    Ok(())
}
