//! Catalog view-model for the product dashboard.
//!
//! [`CatalogViewModel`] owns the in-memory catalog snapshot, the category
//! list and the filter state, and keeps the snapshot consistent with the
//! store API through any [`CatalogService`](catalog_client::CatalogService).
//! The `catalog-dashboard` binary is a headless front end over it.

pub mod editor;
pub mod error;
pub mod mutation;
pub mod view_model;

pub use editor::EditorMode;
pub use error::SaveError;
pub use mutation::{MutationKind, MutationPhase, PendingMutation};
pub use view_model::CatalogViewModel;
