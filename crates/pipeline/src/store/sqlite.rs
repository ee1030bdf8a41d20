//! SQLite-backed history store.

use std::fmt::Display;

use calculator_database::{calculation_history, CalculationHistoryRow, Database};
use chrono::{DateTime, Utc};
use estimate_core::{
    async_trait, CalculationKind, HistoryRecord, HistoryStore, NewHistoryRecord,
    PersistenceError, RecordId, UserId,
};

/// A [`HistoryStore`] over the `calculation_history` table.
///
/// Requests and results are stored as JSON documents and decoded on read.
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    db: Database,
}

impl SqliteHistoryStore {
    /// Create a store over a connected and migrated database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, PersistenceError> {
        let input_data = serde_json::to_string(&record.input_data).map_err(unavailable)?;
        let results = serde_json::to_string(&record.results).map_err(unavailable)?;

        let row = calculation_history::insert_calculation(
            self.db.pool(),
            record.user_id.as_ref().map(UserId::as_str),
            record.calculation_type.as_str(),
            &input_data,
            &results,
        )
        .await
        .map_err(unavailable)?;

        let created_at = parse_timestamp(&row.created_at)?;
        Ok(HistoryRecord::from_new(record, RecordId(row.id), created_at))
    }

    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<HistoryRecord>, PersistenceError> {
        let rows = calculation_history::list_for_user(self.db.pool(), owner.as_str())
            .await
            .map_err(unavailable)?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: CalculationHistoryRow) -> Result<HistoryRecord, PersistenceError> {
    let calculation_type = row
        .calculation_type
        .parse::<CalculationKind>()
        .map_err(unavailable)?;

    Ok(HistoryRecord {
        id: RecordId(row.id),
        user_id: row.user_id.and_then(UserId::new),
        calculation_type,
        input_data: serde_json::from_str(&row.input_data).map_err(unavailable)?,
        results: serde_json::from_str(&row.results).map_err(unavailable)?,
        created_at: parse_timestamp(&row.created_at)?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(unavailable)
}

fn unavailable(err: impl Display) -> PersistenceError {
    PersistenceError::StoreUnavailable(err.to_string())
}
