//! Runtime settings from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://petsAndOwners.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// JSON resource file; the reference list is used when unset.
    pub resources_path: Option<PathBuf>,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `RESOURCES_PATH`, `MAX_CONNECTIONS` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?,
            resources_path: lookup("RESOURCES_PATH").filter(|s| !s.is_empty()).map(PathBuf::from),
            max_connections: parse_or(
                "MAX_CONNECTIONS",
                lookup("MAX_CONNECTIONS"),
                &DEFAULT_MAX_CONNECTIONS.to_string(),
            )?,
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                lookup("BODY_LIMIT_BYTES"),
                &DEFAULT_BODY_LIMIT_BYTES.to_string(),
            )?,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: &str) -> Result<T, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{} has invalid value {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr.port(), 3001);
        assert!(s.resources_path.is_none());
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn overrides_are_parsed() {
        let s = settings(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("RESOURCES_PATH", "resources.json"),
            ("MAX_CONNECTIONS", "2"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "sqlite://other.db");
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(s.resources_path, Some(PathBuf::from("resources.json")));
        assert_eq!(s.max_connections, 2);
    }

    #[test]
    fn bad_number_is_rejected() {
        let err = settings(&[("MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
