//! Load resource declarations from JSON and resolve them against the database.

use crate::config::resolved::{ResolvedModel, ResolvedResource};
use crate::config::{validate, ResourcesConfig};
use crate::error::ConfigError;
use crate::store::table_columns;
use sqlx::SqlitePool;
use std::path::Path;

/// Read a `{"resources": [...]}` document.
pub async fn load_from_path(path: &Path) -> Result<ResourcesConfig, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

/// Build the resolved model (validates first). Every resource must exist; an explicit column list
/// narrows the schema's columns and may not name columns the table lacks.
pub async fn resolve(
    pool: &SqlitePool,
    config: &ResourcesConfig,
) -> Result<ResolvedModel, ConfigError> {
    validate(config)?;
    let mut resources = Vec::with_capacity(config.resources.len());
    for r in &config.resources {
        let actual = table_columns(pool, &r.name).await?;
        if actual.is_empty() {
            return Err(ConfigError::MissingResource(r.name.clone()));
        }
        let columns = match &r.columns {
            Some(cols) => {
                let known = |c: &&String| actual.iter().any(|a| a.eq_ignore_ascii_case(c));
                if let Some(missing) = cols.iter().find(|c| !known(c)) {
                    return Err(ConfigError::UnknownColumn {
                        resource: r.name.clone(),
                        column: missing.clone(),
                    });
                }
                cols.clone()
            }
            None => actual,
        };
        if !columns.iter().any(|c| c.eq_ignore_ascii_case(&r.key_column)) {
            return Err(ConfigError::InvalidKeyColumn {
                resource: r.name.clone(),
                column: r.key_column.clone(),
            });
        }
        tracing::info!(
            resource = %r.name,
            kind = ?r.kind,
            key = %r.key_column,
            columns = columns.len(),
            "resolved resource"
        );
        resources.push(ResolvedResource {
            name: r.name.clone(),
            kind: r.kind,
            key_column: r.key_column.clone(),
            columns,
        });
    }
    Ok(ResolvedModel::new(resources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResourceConfig, ResourceKind};
    use std::io::Write;

    #[tokio::test]
    async fn loads_resources_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"resources":[{{"name":"owners","kind":"table"}},{{"name":"ownerPets","kind":"view","key_column":"ownerId"}}]}}"#
        )
        .unwrap();
        let cfg = load_from_path(file.path()).await.unwrap();
        assert_eq!(cfg.resources.len(), 2);
        assert_eq!(cfg.resources[1].kind, ResourceKind::View);
        assert_eq!(cfg.resources[1].key_column, "ownerId");
    }

    #[tokio::test]
    async fn malformed_file_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[not json").unwrap();
        let err = load_from_path(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    async fn pool_with_owners() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE owners (id INTEGER PRIMARY KEY, name TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    fn with_columns(name: &str, cols: &[&str]) -> ResourcesConfig {
        let mut r = ResourceConfig::table(name);
        r.columns = Some(cols.iter().map(|c| c.to_string()).collect());
        ResourcesConfig { resources: vec![r] }
    }

    #[tokio::test]
    async fn explicit_columns_still_require_the_table() {
        let pool = pool_with_owners().await;
        let err = resolve(&pool, &with_columns("owls", &["id", "name"])).await.unwrap_err();
        assert!(matches!(err, ConfigError::MissingResource(name) if name == "owls"));
    }

    #[tokio::test]
    async fn explicit_columns_must_exist_in_the_table() {
        let pool = pool_with_owners().await;
        let err = resolve(&pool, &with_columns("owners", &["id", "nickname"])).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnknownColumn { column, .. } if column == "nickname"));
    }

    #[tokio::test]
    async fn explicit_columns_narrow_the_whitelist() {
        let pool = pool_with_owners().await;
        let model = resolve(&pool, &with_columns("owners", &["id"])).await.unwrap();
        let owners = model.resource("owners").unwrap();
        assert_eq!(owners.columns, ["id"]);
        assert!(!owners.has_column("name"));
    }
}
