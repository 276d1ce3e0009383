//! Catalog domain types and pure reconciliation logic.
//!
//! This crate has no I/O. It defines the product entity and its draft and
//! patch forms, form validation, client-side filtering, and the ordered
//! snapshot that the dashboard keeps in sync with the store API.

pub mod categories;
pub mod error;
pub mod filter;
pub mod form;
pub mod product;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use categories::CategorySet;
pub use error::ValidationErrors;
pub use filter::FilterState;
pub use form::ProductForm;
pub use product::{NewProduct, Product, ProductPatch, Rating};
pub use snapshot::CatalogSnapshot;
pub use types::{CategoryName, ProductId};
pub use validation::ProductField;
