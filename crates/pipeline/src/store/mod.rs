//! `HistoryStore` adapters.

mod memory;
mod sqlite;

pub use memory::MemoryHistoryStore;
pub use sqlite::SqliteHistoryStore;
