//! Post-setup verification: confirm the core tables answer a count query.
//!
//! Purely informational. A verification failure is logged but never changes
//! the run's totals or exit status.

use crate::management_api::ManagementApi;

const CORE_TABLES: &[&str] = &["users", "g1000_participants", "projects"];

pub async fn verify_tables(api: &ManagementApi) {
    tracing::info!("verifying database setup");

    for &table in CORE_TABLES {
        let query = format!("SELECT count(*) AS count FROM \"{table}\";");
        match api.execute(&query).await {
            Ok(rows) => {
                tracing::info!(table, rows = row_count(&rows), "table present");
            }
            Err(err) => {
                tracing::warn!(table, error = %err, "verification query failed");
            }
        }
    }
}

/// Pulls `count` out of the first result row, tolerating either a numeric or
/// stringified value; the endpoint has returned both.
fn row_count(rows: &serde_json::Value) -> i64 {
    rows.as_array()
        .and_then(|rows| rows.first())
        .and_then(|row| row.get("count"))
        .and_then(|count| {
            count
                .as_i64()
                .or_else(|| count.as_str().and_then(|s| s.parse().ok()))
        })
        .unwrap_or(0)
}
