//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A saved calculator run, as stored.
///
/// `input_data` and `results` hold the JSON documents written by the caller;
/// this crate does not interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CalculationHistoryRow {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Owner identity, if the calculation was made while signed in.
    pub user_id: Option<String>,
    /// Calculator kind ("solar", "wind", "efficiency").
    pub calculation_type: String,
    /// Request JSON.
    pub input_data: String,
    /// Result JSON.
    pub results: String,
    /// Creation timestamp (RFC 3339, UTC, millisecond precision).
    pub created_at: String,
}
