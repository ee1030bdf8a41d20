//! Calculation history records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::{CalculationKind, CalculationRequest};
use crate::result::CalculationResult;

/// Identifier of an authenticated user, as issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Build a user id, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage-assigned identifier of a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A history record before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryRecord {
    pub user_id: Option<UserId>,
    pub calculation_type: CalculationKind,
    pub input_data: CalculationRequest,
    pub results: CalculationResult,
}

impl NewHistoryRecord {
    /// Snapshot a request and its result for the given owner.
    pub fn new(
        user_id: Option<UserId>,
        request: CalculationRequest,
        result: CalculationResult,
    ) -> Self {
        Self {
            user_id,
            calculation_type: request.kind(),
            input_data: request,
            results: result,
        }
    }
}

/// A persisted calculation: request and result, owned by an identity.
///
/// Records are append-only; nothing in this workspace mutates one after
/// the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: RecordId,
    pub user_id: Option<UserId>,
    pub calculation_type: CalculationKind,
    pub input_data: CalculationRequest,
    pub results: CalculationResult,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Attach storage-assigned fields to a new record.
    pub fn from_new(record: NewHistoryRecord, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: record.user_id,
            calculation_type: record.calculation_type,
            input_data: record.input_data,
            results: record.results,
            created_at,
        }
    }
}
