//! Route handlers for the calculator web server.

pub mod calculate;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod history;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/calculate", post(calculate::calculate_api))
        .route("/api/history", get(history::history_api))
        .route("/api/dashboard", get(dashboard::dashboard_api))
        .route("/api/contact", post(contact::contact_api))
}
