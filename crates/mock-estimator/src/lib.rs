//! Stub estimation sources for the renewable-energy calculator.
//!
//! This crate provides implementations of the `EstimationSource` trait that
//! need no modeling service:
//! - `StubEstimator` - Returns fixed figures per calculation kind
//! - `DelayedEstimator` - Wraps another source with artificial delay
//! - `UnavailableEstimator` - Fails every call
//!
//! # Example
//!
//! ```rust
//! use mock_estimator::{EstimationSource, SolarRequest, StubEstimator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_estimator::EstimationError> {
//!     let source = StubEstimator::new();
//!
//!     let request = SolarRequest {
//!         location: "Austin".to_string(),
//!         roof_area_sqm: 100.0,
//!         panel_efficiency_pct: 20.0,
//!     };
//!
//!     let estimate = source.solar(&request).await?;
//!     assert_eq!(estimate.annual_production_kwh, 12_500.0);
//!     Ok(())
//! }
//! ```

mod delayed;
mod stub;
mod unavailable;

// Re-export estimate-core types for convenience
pub use estimate_core::{
    async_trait, EfficiencyEstimate, EfficiencyRequest, EstimationError, EstimationSource,
    ProductionEstimate, SolarRequest, WindRequest,
};

pub use delayed::DelayedEstimator;
pub use stub::{StubEstimator, EFFICIENCY_RECOMMENDATIONS};
pub use unavailable::UnavailableEstimator;
