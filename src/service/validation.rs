//! Request body checks against the resource's column whitelist.

use crate::config::ResolvedResource;
use crate::error::AppError;
use serde_json::{Map, Value};

pub struct ColumnGuard;

impl ColumnGuard {
    /// Body must name at least one column, and every key must be a known column of the resource.
    pub fn check(resource: &ResolvedResource, body: &Map<String, Value>) -> Result<(), AppError> {
        if body.is_empty() {
            return Err(AppError::Validation("body must contain at least one column".into()));
        }
        let unknown: Vec<String> = body
            .keys()
            .filter(|k| !resource.has_column(k))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::UnknownColumns {
                resource: resource.name.clone(),
                columns: unknown,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceKind;
    use serde_json::json;

    fn owners() -> ResolvedResource {
        ResolvedResource {
            name: "petOwners".into(),
            kind: ResourceKind::Table,
            key_column: "id".into(),
            columns: vec!["id".into(), "firstName".into(), "lastName".into()],
        }
    }

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn known_columns_pass() {
        let body = obj(json!({"firstName": "Ann", "lastName": "Lee"}));
        ColumnGuard::check(&owners(), &body).unwrap();
    }

    #[test]
    fn unknown_columns_are_listed() {
        let body = obj(json!({"firstName": "Ann", "age": 3, "x; --": 1}));
        let err = ColumnGuard::check(&owners(), &body).unwrap_err();
        match err {
            AppError::UnknownColumns { resource, columns } => {
                assert_eq!(resource, "petOwners");
                assert_eq!(columns, ["age", "x; --"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn column_names_match_without_case() {
        let body = obj(json!({"FIRSTNAME": "Ann", "lastname": "Lee"}));
        ColumnGuard::check(&owners(), &body).unwrap();
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(
            ColumnGuard::check(&owners(), &Map::new()),
            Err(AppError::Validation(_))
        ));
    }
}
