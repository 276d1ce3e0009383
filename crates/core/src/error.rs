use std::collections::BTreeMap;

use serde::Serialize;

use crate::validation::ProductField;

/// Field → message mapping produced by form validation.
///
/// Entries iterate in form order. This error never reaches the network layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("Validation failed: {}", field_list(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<ProductField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing with its standard message.
    pub fn insert(&mut self, field: ProductField) {
        self.errors
            .insert(field, field.required_message().to_string());
    }

    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<ProductField> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn field_list(errors: &BTreeMap<ProductField, String>) -> String {
    errors
        .keys()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
