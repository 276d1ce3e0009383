//! The ordered in-memory product list and its reconciliation rules.
//!
//! The snapshot is populated once from a full list fetch and afterwards only
//! changes through the three commit operations: [`CatalogSnapshot::prepend`]
//! for creates, [`CatalogSnapshot::replace`] for updates and
//! [`CatalogSnapshot::remove`] for deletes. Every operation keeps ids unique.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// Ordered, id-unique sequence of persisted products. Newest creates first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a list fetch. A repeated id keeps its first
    /// occurrence.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut snapshot = Self::new();
        for product in products {
            if !snapshot.contains(product.id) {
                snapshot.products.push(product);
            }
        }
        snapshot
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Ids in snapshot order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Commit a create: put `product` at the front.
    ///
    /// If the server hands back an id that is already present, the stale
    /// entry is dropped so the id stays unique.
    pub fn prepend(&mut self, product: Product) {
        self.products.retain(|p| p.id != product.id);
        self.products.insert(0, product);
    }

    /// Commit an update: swap the entry with the same id in place.
    ///
    /// Returns `false` and leaves the snapshot untouched when no entry has
    /// that id, so a late commit never resurrects a removed product.
    pub fn replace(&mut self, product: Product) -> bool {
        match self.position(product.id) {
            Some(index) => {
                self.products[index] = product;
                true
            }
            None => false,
        }
    }

    /// Commit a delete. Returns the removed entry, or `None` if the id was
    /// already gone.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position(id)?;
        Some(self.products.remove(index))
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
