//! Resolved resource model: config validated and columns enumerated for runtime use.

use crate::config::ResourceKind;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct ResolvedResource {
    pub name: String,
    pub kind: ResourceKind,
    pub key_column: String,
    /// Whitelisted columns in table order.
    pub columns: Vec<String>,
}

impl ResolvedResource {
    pub fn is_writable(&self) -> bool {
        self.kind == ResourceKind::Table
    }

    /// SQLite column names are case-insensitive.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedModel {
    pub resources: Vec<ResolvedResource>,
    by_name: HashMap<String, usize>,
}

impl ResolvedModel {
    pub fn new(resources: Vec<ResolvedResource>) -> Self {
        let by_name = resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
        ResolvedModel { resources, by_name }
    }

    pub fn resource(&self, name: &str) -> Option<&ResolvedResource> {
        self.by_name.get(name).map(|&i| &self.resources[i])
    }
}
