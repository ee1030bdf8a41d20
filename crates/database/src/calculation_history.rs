//! Calculation history persistence.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::CalculationHistoryRow;

/// Insert a calculation and return the stored row with its id and timestamp.
pub async fn insert_calculation(
    pool: &SqlitePool,
    user_id: Option<&str>,
    calculation_type: &str,
    input_data: &str,
    results: &str,
) -> Result<CalculationHistoryRow> {
    let row = sqlx::query_as::<_, CalculationHistoryRow>(
        r#"
        INSERT INTO calculation_history (user_id, calculation_type, input_data, results)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, calculation_type, input_data, results, created_at
        "#,
    )
    .bind(user_id)
    .bind(calculation_type)
    .bind(input_data)
    .bind(results)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// List all calculations owned by a user, newest first.
pub async fn list_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<CalculationHistoryRow>> {
    let rows = sqlx::query_as::<_, CalculationHistoryRow>(
        r#"
        SELECT id, user_id, calculation_type, input_data, results, created_at
        FROM calculation_history
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count all stored calculations.
pub async fn count_calculations(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM calculation_history
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Count calculations grouped by calculator kind.
pub async fn count_by_type(pool: &SqlitePool) -> Result<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT calculation_type, COUNT(*) as count
        FROM calculation_history
        GROUP BY calculation_type
        ORDER BY count DESC, calculation_type
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
