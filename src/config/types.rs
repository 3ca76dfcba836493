//! Raw resource declarations as read from JSON (or the built-in reference list).

use serde::{Deserialize, Serialize};

/// Whether a resource accepts writes. Views are read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Table,
    View,
}

fn default_key_column() -> String {
    "id".into()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Table or view name; also the path segment under `/api`.
    pub name: String,
    pub kind: ResourceKind,
    /// Column used by single-row lookups, updates and deletes.
    #[serde(default = "default_key_column")]
    pub key_column: String,
    /// Explicit column whitelist. When absent, columns are read from the database.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl ResourceConfig {
    pub fn table(name: &str) -> Self {
        ResourceConfig {
            name: name.into(),
            kind: ResourceKind::Table,
            key_column: default_key_column(),
            columns: None,
        }
    }

    pub fn view(name: &str) -> Self {
        ResourceConfig {
            kind: ResourceKind::View,
            ..ResourceConfig::table(name)
        }
    }

    pub fn with_key_column(mut self, column: &str) -> Self {
        self.key_column = column.into();
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    pub resources: Vec<ResourceConfig>,
}

impl ResourcesConfig {
    /// The pets-and-owners deployment.
    pub fn reference() -> Self {
        ResourcesConfig {
            resources: vec![
                ResourceConfig::table("pets"),
                ResourceConfig::table("petOwners"),
                ResourceConfig::view("peopleWithoutPets"),
                // no id column in this view
                ResourceConfig::view("petOwnersAndPets").with_key_column("petOwnerId"),
                ResourceConfig::view("petsWithoutOwners"),
            ],
        }
    }
}
