//! The estimator and history store traits.

use async_trait::async_trait;

use crate::error::{EstimationError, PersistenceError};
use crate::history::{HistoryRecord, NewHistoryRecord, UserId};
use crate::request::{EfficiencyRequest, SolarRequest, WindRequest};
use crate::result::{EfficiencyEstimate, ProductionEstimate};

/// A backend that computes renewable-energy estimates.
///
/// Implementations can range from constant stubs to network calls against
/// weather or energy-modeling services. There is one method per calculation
/// kind, so each estimator only ever sees the fields of its own kind.
/// This trait is object-safe and can be used with `Arc<dyn EstimationSource>`.
#[async_trait]
pub trait EstimationSource: Send + Sync {
    /// Estimate rooftop solar production.
    async fn solar(&self, request: &SolarRequest) -> Result<ProductionEstimate, EstimationError>;

    /// Estimate wind turbine production.
    async fn wind(&self, request: &WindRequest) -> Result<ProductionEstimate, EstimationError>;

    /// Estimate household efficiency improvements.
    async fn efficiency(
        &self,
        request: &EfficiencyRequest,
    ) -> Result<EfficiencyEstimate, EstimationError>;

    /// Get a human-readable name for this source.
    fn name(&self) -> &str;

    /// Check if the source is ready to estimate.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

/// Row storage for calculation history.
///
/// Stores assign `id` and `created_at` on insert. There is no update or
/// delete.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one record.
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, PersistenceError>;

    /// All records owned by `owner`, newest first.
    async fn list_for_owner(&self, owner: &UserId)
        -> Result<Vec<HistoryRecord>, PersistenceError>;
}
