//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a resolved resource.

use crate::config::ResolvedResource;
use serde_json::{Map, Value};

/// Quote identifier for SQLite (safe: only from the resolved model).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// SELECT * over the whole table or view.
pub fn select_all(resource: &ResolvedResource) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT * FROM {}", quoted(&resource.name));
    q
}

/// SELECT * filtered on the resource's key column.
pub fn select_by_key(resource: &ResolvedResource, key: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(key);
    q.sql = format!(
        "SELECT * FROM {} WHERE {} = ?{}",
        quoted(&resource.name),
        quoted(&resource.key_column),
        n
    );
    q
}

/// INSERT with one column per body key, in body order.
pub fn insert(resource: &ResolvedResource, body: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(&resource.name);
    if body.is_empty() {
        q.sql = format!("INSERT INTO {} DEFAULT VALUES", table);
        return q;
    }
    let mut cols = Vec::with_capacity(body.len());
    let mut placeholders = Vec::with_capacity(body.len());
    for (k, v) in body {
        let n = q.push_param(v.clone());
        cols.push(quoted(k));
        placeholders.push(format!("?{}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by key: SET one column per body key, in body order. A key column in the body is set
/// like any other column; the row is still selected by `key`. Returns None for an empty body.
pub fn update(
    resource: &ResolvedResource,
    key: Value,
    body: &Map<String, Value>,
) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (k, v) in body {
        let n = q.push_param(v.clone());
        sets.push(format!("{} = ?{}", quoted(k), n));
    }
    if sets.is_empty() {
        return None;
    }
    let key_param = q.push_param(key);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quoted(&resource.name),
        sets.join(", "),
        quoted(&resource.key_column),
        key_param
    );
    Some(q)
}

/// DELETE by key.
pub fn delete(resource: &ResolvedResource, key: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(key);
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ?{}",
        quoted(&resource.name),
        quoted(&resource.key_column),
        n
    );
    q
}
