//! Response bodies for write statements.

use serde::Serialize;
use sqlx::sqlite::SqliteQueryResult;

/// Execution metadata reported by the driver for INSERT, UPDATE and DELETE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Rows affected by the statement.
    pub changes: u64,
    /// Rowid of the most recent successful INSERT on the connection.
    pub last_insert_rowid: i64,
}

impl From<SqliteQueryResult> for ExecutionResult {
    fn from(r: SqliteQueryResult) -> Self {
        ExecutionResult {
            changes: r.rows_affected(),
            last_insert_rowid: r.last_insert_rowid(),
        }
    }
}
