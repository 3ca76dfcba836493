//! Generic CRUD execution against SQLite.

use crate::config::ResolvedResource;
use crate::error::AppError;
use crate::response::ExecutionResult;
use crate::service::ColumnGuard;
use crate::sql::{bind_all, delete, insert, select_all, select_by_key, update, QueryBuf};
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All rows of the table or view.
    pub async fn list(
        pool: &SqlitePool,
        resource: &ResolvedResource,
    ) -> Result<Vec<Value>, AppError> {
        let q = select_all(resource);
        Self::query_many(pool, &q).await
    }

    /// Rows whose key column equals `key`. Empty when nothing matches.
    pub async fn read(
        pool: &SqlitePool,
        resource: &ResolvedResource,
        key: &Value,
    ) -> Result<Vec<Value>, AppError> {
        let q = select_by_key(resource, key.clone());
        Self::query_many(pool, &q).await
    }

    /// Insert one row from the body's columns.
    pub async fn create(
        pool: &SqlitePool,
        resource: &ResolvedResource,
        body: &Map<String, Value>,
    ) -> Result<ExecutionResult, AppError> {
        Self::ensure_writable(resource, "create")?;
        ColumnGuard::check(resource, body)?;
        let q = insert(resource, body);
        Self::execute(pool, &q).await
    }

    /// Update the body's columns on the row with `key`. Missing rows report zero changes.
    pub async fn update(
        pool: &SqlitePool,
        resource: &ResolvedResource,
        key: &Value,
        body: &Map<String, Value>,
    ) -> Result<ExecutionResult, AppError> {
        Self::ensure_writable(resource, "update")?;
        ColumnGuard::check(resource, body)?;
        let q = update(resource, key.clone(), body)
            .ok_or_else(|| AppError::Validation("body must contain at least one column".into()))?;
        Self::execute(pool, &q).await
    }

    /// Delete the row with `key`.
    pub async fn delete(
        pool: &SqlitePool,
        resource: &ResolvedResource,
        key: &Value,
    ) -> Result<ExecutionResult, AppError> {
        Self::ensure_writable(resource, "delete")?;
        let q = delete(resource, key.clone());
        Self::execute(pool, &q).await
    }

    fn ensure_writable(resource: &ResolvedResource, op: &str) -> Result<(), AppError> {
        if resource.is_writable() {
            Ok(())
        } else {
            Err(AppError::MethodNotAllowed(format!("{} on view {}", op, resource.name)))
        }
    }

    async fn query_many(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query(&q.sql), &q.params).fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<ExecutionResult, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let result = bind_all(sqlx::query(&q.sql), &q.params).execute(pool).await?;
        Ok(result.into())
    }
}

fn row_to_json(row: &SqliteRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = Map::new();
    for (i, col) in row.columns().iter().enumerate() {
        map.insert(col.name().to_string(), cell_to_value(row, i));
    }
    Value::Object(map)
}

/// Decode by the value's storage class, not the declared column type.
fn cell_to_value(row: &SqliteRow, index: usize) -> Value {
    use sqlx::{Row, TypeInfo, ValueRef};
    let Ok(raw) = row.try_get_raw(index) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    let storage = raw.type_info().name().to_string();
    match storage.as_str() {
        "INTEGER" => row
            .try_get::<i64, _>(index)
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(index)
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|bytes| Value::Array(bytes.into_iter().map(|b| Value::Number(b.into())).collect()))
            .unwrap_or(Value::Null),
        _ => row
            .try_get::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}
