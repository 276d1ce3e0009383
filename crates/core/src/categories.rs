//! Category names offered by the filter selector.

use serde::{Deserialize, Serialize};

use crate::types::CategoryName;

/// Distinct category names in the order the store API returned them.
///
/// Fetched once; catalog mutations never change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<CategoryName>,
}

impl CategorySet {
    /// Build a set from fetched names, dropping repeats.
    pub fn from_names(names: impl IntoIterator<Item = CategoryName>) -> Self {
        let mut unique: Vec<CategoryName> = Vec::new();
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn names(&self) -> &[CategoryName] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
