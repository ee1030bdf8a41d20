//! Unavailable estimator - fails every call.

use estimate_core::{
    async_trait, EfficiencyEstimate, EfficiencyRequest, EstimationError, EstimationSource,
    ProductionEstimate, SolarRequest, WindRequest,
};

/// A source that is always down.
///
/// Useful for exercising the "estimation failed, nothing to show" path.
#[derive(Debug, Clone)]
pub struct UnavailableEstimator {
    reason: String,
}

impl UnavailableEstimator {
    /// Create a source that fails with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, EstimationError> {
        Err(EstimationError::EstimationUnavailable(self.reason.clone()))
    }
}

impl Default for UnavailableEstimator {
    fn default() -> Self {
        Self::new("estimation service offline")
    }
}

#[async_trait]
impl EstimationSource for UnavailableEstimator {
    async fn solar(&self, _request: &SolarRequest) -> Result<ProductionEstimate, EstimationError> {
        self.fail()
    }

    async fn wind(&self, _request: &WindRequest) -> Result<ProductionEstimate, EstimationError> {
        self.fail()
    }

    async fn efficiency(
        &self,
        _request: &EfficiencyRequest,
    ) -> Result<EfficiencyEstimate, EstimationError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "UnavailableEstimator"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
