//! Stub estimator - returns the same canned figures for every request.

use estimate_core::{
    async_trait, EfficiencyEstimate, EfficiencyRequest, EstimationError, EstimationSource,
    ProductionEstimate, SolarRequest, WindRequest,
};

/// Recommendations returned by the stub efficiency estimate, in display order.
pub const EFFICIENCY_RECOMMENDATIONS: [&str; 4] = [
    "Upgrade to energy-efficient appliances",
    "Improve insulation in attic and walls",
    "Install smart thermostats and lighting controls",
    "Replace single-pane windows with double-glazed models",
];

/// An estimator that ignores its inputs and returns fixed figures per kind.
///
/// Stands in for the modeling service until one is wired up; the pipeline
/// cannot tell it apart from a real source.
#[derive(Debug, Clone, Default)]
pub struct StubEstimator;

impl StubEstimator {
    /// Create a new StubEstimator.
    pub fn new() -> Self {
        Self
    }

    /// The canned solar estimate.
    pub fn solar_estimate() -> ProductionEstimate {
        ProductionEstimate::new(12_500.0, 8.7, 1_875.0, 8.0)
    }

    /// The canned wind estimate.
    pub fn wind_estimate() -> ProductionEstimate {
        ProductionEstimate::new(18_700.0, 13.2, 2_805.0, 12.0)
    }

    /// The canned efficiency estimate.
    pub fn efficiency_estimate() -> EfficiencyEstimate {
        EfficiencyEstimate::new(
            950.0,
            3.2,
            EFFICIENCY_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
        )
    }
}

#[async_trait]
impl EstimationSource for StubEstimator {
    async fn solar(&self, request: &SolarRequest) -> Result<ProductionEstimate, EstimationError> {
        tracing::debug!(location = %request.location, "Stub solar estimate");
        Ok(Self::solar_estimate())
    }

    async fn wind(&self, request: &WindRequest) -> Result<ProductionEstimate, EstimationError> {
        tracing::debug!(location = %request.location, "Stub wind estimate");
        Ok(Self::wind_estimate())
    }

    async fn efficiency(
        &self,
        request: &EfficiencyRequest,
    ) -> Result<EfficiencyEstimate, EstimationError> {
        tracing::debug!(location = %request.location, "Stub efficiency estimate");
        Ok(Self::efficiency_estimate())
    }

    fn name(&self) -> &str {
        "StubEstimator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimate_core::TurbineModel;

    #[tokio::test]
    async fn test_solar_stub() {
        let source = StubEstimator::new();
        let request = SolarRequest {
            location: "Austin".to_string(),
            roof_area_sqm: 100.0,
            panel_efficiency_pct: 20.0,
        };

        let estimate = source.solar(&request).await.unwrap();
        assert_eq!(estimate.annual_production_kwh, 12_500.0);
        assert_eq!(estimate.co2_reduction_tons, 8.7);
        assert_eq!(estimate.savings_estimate_usd, 1_875.0);
        assert_eq!(estimate.payback_period_years, 8.0);
    }

    #[tokio::test]
    async fn test_wind_stub() {
        let source = StubEstimator::new();
        let request = WindRequest {
            location: "Amarillo".to_string(),
            turbine_height_m: 20.0,
            turbine_model: TurbineModel::Residential,
        };

        let estimate = source.wind(&request).await.unwrap();
        assert_eq!(estimate.annual_production_kwh, 18_700.0);
        assert_eq!(estimate.payback_period_years, 12.0);
    }

    #[tokio::test]
    async fn test_efficiency_stub() {
        let source = StubEstimator::new();
        let request = EfficiencyRequest {
            location: "Austin".to_string(),
            monthly_consumption_kwh: 500.0,
        };

        let estimate = source.efficiency(&request).await.unwrap();
        assert_eq!(estimate.potential_savings_usd, 950.0);
        assert_eq!(estimate.recommendations.len(), 4);
        assert_eq!(estimate.recommendations[0], EFFICIENCY_RECOMMENDATIONS[0]);
    }

    #[tokio::test]
    async fn test_source_name() {
        let source = StubEstimator::new();
        assert_eq!(source.name(), "StubEstimator");
        assert!(source.is_ready().await);
    }
}
