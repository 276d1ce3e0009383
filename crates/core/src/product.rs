//! Product entity and the shapes it takes on the wire.
//!
//! A [`Product`] always carries a server-assigned id. Drafts that have not
//! been acknowledged by the store API are [`NewProduct`]s, and partial
//! updates are [`ProductPatch`]es.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryName, ProductId};

/// Ellipsis appended to truncated excerpts.
const ELLIPSIS: char = '…';

/// Aggregate customer rating as reported by the store API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A persisted catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, immutable once assigned.
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    /// Full description. Never truncated in storage; see [`Product::excerpt`].
    pub description: String,
    pub category: CategoryName,
    /// URL of the product image.
    pub image: String,
    /// Only present on listed products; never sent back to the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Description shortened to at most `max_chars` characters for card
    /// display. Truncation happens on a character boundary and appends `…`.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let mut short: String = self
            .description
            .chars()
            .take(max_chars.saturating_sub(1))
            .collect();
        short.push(ELLIPSIS);
        short
    }

    /// Price rendered as `$<price>`, e.g. `$109.95` or `$20`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// A product that exists only in a creation form.
///
/// Serializes as "Product minus `id`", which is the `POST /products` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: CategoryName,
    pub image: String,
}

impl NewProduct {
    /// Attach an id to the draft.
    ///
    /// Only the party that assigns ids (the store API, or a stand-in for it)
    /// should call this.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: None,
        }
    }
}

/// Full or partial field set for `PUT /products/{id}`.
///
/// Absent fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }

    /// Overwrite the fields present in the patch, leaving the rest as is.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
    }
}

impl From<NewProduct> for ProductPatch {
    fn from(draft: NewProduct) -> Self {
        Self {
            title: Some(draft.title),
            price: Some(draft.price),
            description: Some(draft.description),
            category: Some(draft.category),
            image: Some(draft.image),
        }
    }
}
