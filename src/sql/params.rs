//! Convert serde_json::Value to values that sqlx can bind to SQLite.

use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A value that can be bound to a SQLite statement. Converts from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqliteBindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    /// Arrays and objects are stored as their JSON text.
    Json(String),
}

impl SqliteBindValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqliteBindValue::Null,
            Value::Bool(b) => SqliteBindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqliteBindValue::I64(i)
                } else if n.is_u64() {
                    // above i64::MAX; text keeps every digit
                    SqliteBindValue::String(n.to_string())
                } else {
                    SqliteBindValue::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => SqliteBindValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => SqliteBindValue::Json(v.to_string()),
        }
    }

    pub fn bind<'q>(
        self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            SqliteBindValue::Null => query.bind(Option::<String>::None),
            SqliteBindValue::Bool(b) => query.bind(b),
            SqliteBindValue::I64(n) => query.bind(n),
            SqliteBindValue::F64(n) => query.bind(n),
            SqliteBindValue::String(s) | SqliteBindValue::Json(s) => query.bind(s),
        }
    }
}

/// Bind every parameter in order.
pub fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for p in params {
        query = SqliteBindValue::from_json(p).bind(query);
    }
    query
}

/// Path key as a bind value: canonical integers bind as integers, anything else as text.
pub fn key_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) if n.to_string() == raw => Value::Number(n.into()),
        _ => Value::String(raw.to_string()),
    }
}
