//! In-process history store.

use chrono::Utc;
use estimate_core::{
    async_trait, HistoryRecord, HistoryStore, NewHistoryRecord, PersistenceError, RecordId,
    UserId,
};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    records: Vec<HistoryRecord>,
}

/// A [`HistoryStore`] kept in memory.
///
/// Assigns ids and timestamps the way the SQLite store does. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryHistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all owners.
    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, PersistenceError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;

        let stored = HistoryRecord::from_new(record, RecordId(state.next_id), Utc::now());
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<HistoryRecord>, PersistenceError> {
        let state = self.state.lock().await;
        let mut records: Vec<HistoryRecord> = state
            .records
            .iter()
            .filter(|record| record.user_id.as_ref() == Some(owner))
            .cloned()
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}
