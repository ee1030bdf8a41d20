//! Error types for estimation and persistence.

use thiserror::Error;

/// Errors that can occur while validating or estimating a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    /// The calculator type is not one of the supported kinds.
    #[error("invalid calculation type: {0}")]
    InvalidRequestKind(String),

    /// A field required by the selected kind is missing or out of range.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The estimation data source failed or timed out.
    #[error("estimation unavailable: {0}")]
    EstimationUnavailable(String),
}

impl EstimationError {
    /// Whether the error was caught by local validation, before dispatch.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidRequestKind(_) | Self::InvalidField(_))
    }
}

/// Errors reported by the calculation history store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store could not be reached or rejected the operation.
    #[error("history store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store requires an owner identity and none was present.
    #[error("authentication required to save calculation history")]
    AuthRequired,
}
