//! HTTP server for the renewable-energy calculator.
//!
//! Serves calculator submissions, per-user calculation history, the
//! dashboard snapshot, and the contact form as JSON.

mod config;
mod error;
mod routes;
mod state;
mod validation;

use std::sync::Arc;

use database::Database;
use estimate_core::EstimationSource;
use mock_estimator::{DelayedEstimator, StubEstimator};
use pipeline::PipelineSettings;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting calculator web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let source: Arc<dyn EstimationSource> = if config.estimate_delay.is_zero() {
        Arc::new(StubEstimator::new())
    } else {
        info!(delay_ms = config.estimate_delay.as_millis() as u64, "Stub estimates are delayed");
        Arc::new(DelayedEstimator::new(StubEstimator::new(), config.estimate_delay))
    };

    let settings = PipelineSettings {
        estimate_timeout: config.estimate_timeout,
    };

    // Build application state
    let state = AppState::new(db, source, settings, config.history_require_auth);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Calculator web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
