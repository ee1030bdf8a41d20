//! Application state shared across handlers.

use std::sync::Arc;

use axum::http::HeaderMap;
use database::Database;
use estimate_core::{EstimationSource, HistoryStore, IdentityProvider, StaticIdentity};
use pipeline::{EstimationPipeline, HistoryGateway, PipelineSettings, SqliteHistoryStore};

/// Header carrying the authenticated user id, set by the auth proxy in
/// front of this server.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Estimation backend.
    pub source: Arc<dyn EstimationSource>,
    /// Calculation history storage.
    pub store: Arc<dyn HistoryStore>,
    /// Pipeline tunables.
    pub settings: PipelineSettings,
    /// Refuse anonymous history writes.
    pub require_owner: bool,
}

impl AppState {
    /// Create new application state backed by the given database.
    pub fn new(
        db: Database,
        source: Arc<dyn EstimationSource>,
        settings: PipelineSettings,
        require_owner: bool,
    ) -> Self {
        let store = Arc::new(SqliteHistoryStore::new(db.clone()));
        Self {
            db,
            source,
            store,
            settings,
            require_owner,
        }
    }

    /// Build a pipeline bound to one caller's identity.
    pub fn pipeline_for(&self, identity: StaticIdentity) -> EstimationPipeline {
        let identity: Arc<dyn IdentityProvider> = Arc::new(identity);
        let gateway = HistoryGateway::new(self.store.clone(), identity.clone())
            .with_required_owner(self.require_owner);

        EstimationPipeline::with_settings(
            self.source.clone(),
            gateway,
            identity,
            self.settings.clone(),
        )
    }
}

/// Read the caller's identity from request headers.
///
/// A missing, blank, or non-UTF-8 header means anonymous.
pub fn identity_from_headers(headers: &HeaderMap) -> StaticIdentity {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    StaticIdentity::from_raw(raw)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use mock_estimator::StubEstimator;

    /// State over a fresh in-memory database and the stub estimator.
    pub async fn test_state() -> AppState {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        AppState::new(
            db,
            Arc::new(StubEstimator::new()),
            PipelineSettings::default(),
            false,
        )
    }

    /// Headers for a signed-in user.
    pub fn user_headers(user: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, user.parse().unwrap());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimate_core::UserId;

    #[test]
    fn test_identity_from_headers() {
        let headers = test_support::user_headers("user-1");
        assert_eq!(
            identity_from_headers(&headers).current_user(),
            UserId::new("user-1")
        );

        assert_eq!(identity_from_headers(&HeaderMap::new()).current_user(), None);
        assert_eq!(
            identity_from_headers(&test_support::user_headers(" ")).current_user(),
            None
        );
    }
}
