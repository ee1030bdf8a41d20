//! Core types and ports for renewable-energy estimation.
//!
//! This crate provides the shared contract between the calculator pipeline
//! and whatever computes or stores estimates. It defines:
//!
//! - [`CalculationRequest`] / [`CalculationResult`] - Typed requests and results per kind
//! - [`CalculationForm`] - The loosely-typed form submission, validated into a request
//! - [`EstimationSource`] - The trait every estimator backend must implement
//! - [`HistoryStore`] - The trait for calculation history storage
//! - [`IdentityProvider`] - Read access to the current authenticated identity
//! - [`EstimationError`] / [`PersistenceError`] - Error taxonomy
//!
//! # Example
//!
//! ```rust
//! use estimate_core::{
//!     async_trait, EfficiencyEstimate, EfficiencyRequest, EstimationError, EstimationSource,
//!     ProductionEstimate, SolarRequest, WindRequest,
//! };
//!
//! struct FlatRate;
//!
//! #[async_trait]
//! impl EstimationSource for FlatRate {
//!     async fn solar(&self, _: &SolarRequest) -> Result<ProductionEstimate, EstimationError> {
//!         Ok(ProductionEstimate::new(1000.0, 1.0, 150.0, 10.0))
//!     }
//!
//!     async fn wind(&self, _: &WindRequest) -> Result<ProductionEstimate, EstimationError> {
//!         Ok(ProductionEstimate::new(2000.0, 2.0, 300.0, 12.0))
//!     }
//!
//!     async fn efficiency(&self, _: &EfficiencyRequest) -> Result<EfficiencyEstimate, EstimationError> {
//!         Ok(EfficiencyEstimate::new(100.0, 0.5, vec!["Seal drafts".to_string()]))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FlatRate"
//!     }
//! }
//! ```

mod error;
mod history;
mod identity;
mod request;
mod result;
mod trait_def;

pub use error::{EstimationError, PersistenceError};
pub use history::{HistoryRecord, NewHistoryRecord, RecordId, UserId};
pub use identity::{IdentityProvider, StaticIdentity};
pub use request::{
    CalculationForm, CalculationKind, CalculationRequest, EfficiencyRequest, SolarRequest,
    TurbineModel, WindRequest,
};
pub use result::{CalculationResult, EfficiencyEstimate, ProductionEstimate};
pub use trait_def::{EstimationSource, HistoryStore};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
