//! Estimation pipeline and calculation history gateway.
//!
//! This crate provides the [`EstimationPipeline`] type which validates
//! calculation requests, dispatches them to an estimation source, and saves
//! request/result pairs through the [`HistoryGateway`].
//!
//! # Architecture
//!
//! ```text
//! CalculationForm (from the web layer)
//!          ↓  validate (InvalidRequestKind / InvalidField)
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ESTIMATION PIPELINE                      │
//! │                                                             │
//! │  1. Validate request                                        │
//! │         ↓                                                   │
//! │  2. Dispatch by kind (solar / wind / efficiency)            │
//! │     • bounded by a timeout → EstimationUnavailable          │
//! │         ↓                                                   │
//! │  3. Check the returned result                               │
//! │         ↓                                                   │
//! │  4. Optionally record: HistoryGateway → HistoryStore        │
//! │     • runs on its own task; failure never hides the result  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pipeline::{EstimationPipeline, HistoryGateway, SqliteHistoryStore};
//! use estimate_core::StaticIdentity;
//!
//! let identity = Arc::new(StaticIdentity::from_raw(Some("user-1")));
//! let gateway = HistoryGateway::new(Arc::new(SqliteHistoryStore::new(db)), identity.clone());
//! let pipeline = EstimationPipeline::new(Arc::new(StubEstimator::new()), gateway, identity);
//!
//! let outcome = pipeline.calculate_and_record(&request).await?;
//! ```

mod gateway;
mod pipeline;
mod store;

pub use gateway::HistoryGateway;
pub use pipeline::{CalculationOutcome, EstimationPipeline, PipelineSettings};
pub use store::{MemoryHistoryStore, SqliteHistoryStore};
