//! Delayed estimator - wraps another source with artificial latency.

use std::time::Duration;

use estimate_core::{
    async_trait, EfficiencyEstimate, EfficiencyRequest, EstimationError, EstimationSource,
    ProductionEstimate, SolarRequest, WindRequest,
};
use tokio::time::sleep;

/// A source that wraps another source and adds artificial delay.
///
/// Useful for testing timeout handling and simulating the latency of a
/// remote modeling service.
pub struct DelayedEstimator<S: EstimationSource> {
    inner: S,
    delay: Duration,
}

impl<S: EstimationSource> DelayedEstimator<S> {
    /// Create a new DelayedEstimator wrapping the given source with the specified delay.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a source with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a source with a delay in seconds.
    pub fn with_secs(inner: S, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<S: EstimationSource> EstimationSource for DelayedEstimator<S> {
    async fn solar(&self, request: &SolarRequest) -> Result<ProductionEstimate, EstimationError> {
        sleep(self.delay).await;
        self.inner.solar(request).await
    }

    async fn wind(&self, request: &WindRequest) -> Result<ProductionEstimate, EstimationError> {
        sleep(self.delay).await;
        self.inner.wind(request).await
    }

    async fn efficiency(
        &self,
        request: &EfficiencyRequest,
    ) -> Result<EfficiencyEstimate, EstimationError> {
        sleep(self.delay).await;
        self.inner.efficiency(request).await
    }

    fn name(&self) -> &str {
        "DelayedEstimator"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StubEstimator;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_estimator() {
        let source = DelayedEstimator::with_millis(StubEstimator::new(), 100);
        let request = EfficiencyRequest {
            location: "Austin".to_string(),
            monthly_consumption_kwh: 500.0,
        };

        let start = Instant::now();
        let estimate = source.efficiency(&request).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(estimate.potential_savings_usd, 950.0);
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_source_name() {
        let source = DelayedEstimator::with_millis(StubEstimator::new(), 0);
        assert_eq!(source.name(), "DelayedEstimator");
    }
}
