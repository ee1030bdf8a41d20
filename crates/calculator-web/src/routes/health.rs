//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub estimator: String,
    pub estimator_ready: bool,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        estimator: state.source.name().to_string(),
        estimator_ready: state.source.is_ready().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;

    #[tokio::test]
    async fn test_health_reports_estimator() {
        let Json(health) = health(State(test_state().await)).await;
        assert_eq!(health.status, "ok");
        assert!(health.estimator_ready);
        assert!(!health.estimator.is_empty());
    }
}
