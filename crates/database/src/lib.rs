//! SQLite persistence layer for the renewable-energy calculator.
//!
//! This crate provides async database operations for calculation history
//! using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{calculation_history, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:calculator.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Save a calculation
//!     let row = calculation_history::insert_calculation(
//!         db.pool(),
//!         Some("c27fb365-0c84-4cf2-8555-814bb065e448"),
//!         "efficiency",
//!         r#"{"kind":"efficiency","location":"Austin","monthlyConsumptionKwh":500.0}"#,
//!         r#"{"kind":"efficiency","potentialSavingsUsd":950.0}"#,
//!     )
//!     .await?;
//!     println!("saved calculation {}", row.id);
//!
//!     Ok(())
//! }
//! ```

pub mod calculation_history;
pub mod error;
pub mod models;

pub use error::{DatabaseError, Result};
pub use models::CalculationHistoryRow;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// How long a caller waits for a pooled connection before giving up.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/calculator.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing; use a single connection)
    /// let db = database::Database::connect_with_pool_size("sqlite::memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Self::ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let db = test_db().await;

        let row = calculation_history::insert_calculation(
            db.pool(),
            Some("user-1"),
            "solar",
            r#"{"kind":"solar"}"#,
            r#"{"kind":"solar"}"#,
        )
        .await
        .unwrap();

        assert!(row.id > 0);
        assert_eq!(row.user_id.as_deref(), Some("user-1"));
        assert_eq!(row.calculation_type, "solar");
        assert!(row.created_at.ends_with('Z'));

        let listed = calculation_history::list_for_user(db.pool(), "user-1")
            .await
            .unwrap();
        assert_eq!(listed, vec![row]);
    }

    #[tokio::test]
    async fn test_identical_inserts_get_distinct_ids() {
        let db = test_db().await;

        let first = calculation_history::insert_calculation(db.pool(), None, "wind", "{}", "{}")
            .await
            .unwrap();
        let second = calculation_history::insert_calculation(db.pool(), None, "wind", "{}", "{}")
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            calculation_history::count_calculations(db.pool()).await.unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_list_for_user_newest_first() {
        let db = test_db().await;
        let pool = db.pool();

        let older = calculation_history::insert_calculation(pool, Some("user-1"), "solar", "{}", "{}")
            .await
            .unwrap();
        calculation_history::insert_calculation(pool, Some("user-2"), "wind", "{}", "{}")
            .await
            .unwrap();
        calculation_history::insert_calculation(pool, None, "wind", "{}", "{}")
            .await
            .unwrap();
        let newer =
            calculation_history::insert_calculation(pool, Some("user-1"), "efficiency", "{}", "{}")
                .await
                .unwrap();

        let rows = calculation_history::list_for_user(pool, "user-1").await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        let none = calculation_history::list_for_user(pool, "user-3").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_count_by_type() {
        let db = test_db().await;
        let pool = db.pool();

        for kind in ["solar", "solar", "wind"] {
            calculation_history::insert_calculation(pool, None, kind, "{}", "{}")
                .await
                .unwrap();
        }

        let counts = calculation_history::count_by_type(pool).await.unwrap();
        assert_eq!(
            counts,
            vec![("solar".to_string(), 2), ("wind".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_unknown_kind_rejected_by_schema() {
        let db = test_db().await;

        let result =
            calculation_history::insert_calculation(db.pool(), None, "hydro", "{}", "{}").await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
    }
}
