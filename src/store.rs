//! Database connection and schema introspection. The schema itself is created outside this crate.

use crate::config::Settings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

/// Open a pool on an existing database file. A missing file is an error rather than a fresh empty database.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %settings.database_url, "connected to database");
    Ok(pool)
}

/// Column names of a table or view in declaration order. Empty when no such table or view exists.
pub async fn table_columns(pool: &SqlitePool, name: &str) -> Result<Vec<String>, sqlx::Error> {
    let sql = "SELECT name FROM pragma_table_info(?1) ORDER BY cid";
    tracing::debug!(sql = %sql, table = %name, "query");
    let rows = sqlx::query(sql).bind(name).fetch_all(pool).await?;
    rows.iter().map(|r| r.try_get::<String, _>("name")).collect()
}
