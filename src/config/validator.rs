//! Config validation: identifiers and uniqueness.

use crate::config::ResourcesConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex"))
}

/// True when `s` is a plain SQL identifier (letters, digits, underscore; not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    identifier_re().is_match(s)
}

fn check_identifier(s: &str) -> Result<(), ConfigError> {
    if is_identifier(s) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier(s.to_string()))
    }
}

pub fn validate(config: &ResourcesConfig) -> Result<(), ConfigError> {
    if config.resources.is_empty() {
        return Err(ConfigError::Validation("at least one resource required".into()));
    }
    let mut names = HashSet::new();
    for r in &config.resources {
        check_identifier(&r.name)?;
        check_identifier(&r.key_column)?;
        if let Some(cols) = &r.columns {
            for c in cols {
                check_identifier(c)?;
            }
            if !cols.iter().any(|c| *c == r.key_column) {
                return Err(ConfigError::InvalidKeyColumn {
                    resource: r.name.clone(),
                    column: r.key_column.clone(),
                });
            }
        }
        if !names.insert(r.name.as_str()) {
            return Err(ConfigError::DuplicateResource(r.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceConfig;

    #[test]
    fn reference_config_is_valid() {
        validate(&ResourcesConfig::reference()).unwrap();
    }

    #[test]
    fn empty_config_is_rejected() {
        let err = validate(&ResourcesConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn quoted_or_spaced_names_are_rejected() {
        for bad in ["pets; DROP TABLE pets", "my pets", "\"pets\"", "1pets", ""] {
            let cfg = ResourcesConfig {
                resources: vec![ResourceConfig::table(bad)],
            };
            assert!(
                matches!(validate(&cfg), Err(ConfigError::InvalidIdentifier(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let cfg = ResourcesConfig {
            resources: vec![ResourceConfig::table("pets"), ResourceConfig::view("pets")],
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::DuplicateResource(n)) if n == "pets"));
    }

    #[test]
    fn explicit_columns_must_contain_key() {
        let mut r = ResourceConfig::table("pets");
        r.columns = Some(vec!["name".into(), "species".into()]);
        let cfg = ResourcesConfig { resources: vec![r] };
        assert!(matches!(validate(&cfg), Err(ConfigError::InvalidKeyColumn { .. })));
    }
}
