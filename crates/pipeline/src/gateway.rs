//! Calculation history gateway.

use std::sync::Arc;

use estimate_core::{
    HistoryRecord, HistoryStore, IdentityProvider, NewHistoryRecord, PersistenceError,
};
use tracing::{info, warn};

/// The only reader and writer of calculation history.
///
/// Wraps a [`HistoryStore`] with the ownership policy: when owner
/// enforcement is on, anonymous records are refused with
/// [`PersistenceError::AuthRequired`] before reaching the store.
#[derive(Clone)]
pub struct HistoryGateway {
    store: Arc<dyn HistoryStore>,
    identity: Arc<dyn IdentityProvider>,
    require_owner: bool,
}

impl HistoryGateway {
    /// Create a gateway that accepts anonymous records.
    pub fn new(store: Arc<dyn HistoryStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity,
            require_owner: false,
        }
    }

    /// Refuse records without an owner.
    pub fn with_required_owner(mut self, require_owner: bool) -> Self {
        self.require_owner = require_owner;
        self
    }

    /// Append one record. The store assigns its id and timestamp.
    ///
    /// Not idempotent: inserting the same record twice stores two rows.
    pub async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, PersistenceError> {
        if self.require_owner && record.user_id.is_none() {
            warn!(kind = %record.calculation_type, "Refusing anonymous history record");
            return Err(PersistenceError::AuthRequired);
        }

        let kind = record.calculation_type;
        match self.store.insert(record).await {
            Ok(stored) => {
                info!(id = %stored.id, kind = %kind, "Saved calculation history");
                Ok(stored)
            }
            Err(err) => {
                warn!(kind = %kind, error = %err, "Failed to save calculation history");
                Err(err)
            }
        }
    }

    /// Records owned by the current identity, newest first.
    ///
    /// Anonymous callers get an empty list rather than an error.
    pub async fn list_for_current_user(&self) -> Result<Vec<HistoryRecord>, PersistenceError> {
        let Some(owner) = self.identity.current_user() else {
            return Ok(Vec::new());
        };

        self.store.list_for_owner(&owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryHistoryStore;
    use estimate_core::{
        CalculationRequest, CalculationResult, ProductionEstimate, SolarRequest, StaticIdentity,
        UserId,
    };

    fn solar_record(user_id: Option<UserId>) -> NewHistoryRecord {
        NewHistoryRecord::new(
            user_id,
            CalculationRequest::Solar(SolarRequest {
                location: "Austin".to_string(),
                roof_area_sqm: 100.0,
                panel_efficiency_pct: 20.0,
            }),
            CalculationResult::Solar(ProductionEstimate::new(12_500.0, 8.7, 1_875.0, 8.0)),
        )
    }

    fn gateway_for(user: Option<&str>) -> HistoryGateway {
        HistoryGateway::new(
            Arc::new(MemoryHistoryStore::new()),
            Arc::new(StaticIdentity::from_raw(user)),
        )
    }

    #[tokio::test]
    async fn test_insert_twice_gives_two_records() {
        let gateway = gateway_for(Some("user-1"));
        let owner = UserId::new("user-1");

        let first = gateway.insert(solar_record(owner.clone())).await.unwrap();
        let second = gateway.insert(solar_record(owner)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.input_data, second.input_data);
        assert_eq!(gateway.list_for_current_user().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_anonymous_listing_is_empty() {
        let store = Arc::new(MemoryHistoryStore::new());
        let writer = HistoryGateway::new(store.clone(), Arc::new(StaticIdentity::anonymous()));
        writer.insert(solar_record(None)).await.unwrap();

        let records = writer.list_for_current_user().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_required_owner_refuses_anonymous() {
        let gateway = gateway_for(None).with_required_owner(true);

        let err = gateway.insert(solar_record(None)).await.unwrap_err();
        assert_eq!(err, PersistenceError::AuthRequired);
    }

    #[tokio::test]
    async fn test_required_owner_accepts_owned_records() {
        let gateway = gateway_for(Some("user-1")).with_required_owner(true);

        let stored = gateway
            .insert(solar_record(UserId::new("user-1")))
            .await
            .unwrap();
        assert_eq!(stored.user_id, UserId::new("user-1"));
    }
}
