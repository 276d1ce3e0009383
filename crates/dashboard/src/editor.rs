//! Create/edit form session and product preview.
//!
//! The presentation layer opens a form with [`CatalogViewModel::begin_create`]
//! or [`CatalogViewModel::begin_edit`] and submits it with
//! [`CatalogViewModel::save`], which routes to `create` or `update`
//! depending on whether the form carries an id.

use catalog_client::CatalogService;
use catalog_core::{Product, ProductForm, ProductId};
use serde::Serialize;

use crate::error::SaveError;
use crate::view_model::CatalogViewModel;

/// Whether the product form is open, and for what.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "product_id", rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(ProductId),
}

impl<S: CatalogService> CatalogViewModel<S> {
    /// Open an empty form for a new product.
    pub async fn begin_create(&self) -> ProductForm {
        self.state.write().await.editor = EditorMode::Creating;
        ProductForm::default()
    }

    /// Open a form pre-filled from product `id`. Returns `None` and leaves
    /// the editor unchanged if the product is not in the snapshot.
    pub async fn begin_edit(&self, id: ProductId) -> Option<ProductForm> {
        let mut state = self.state.write().await;
        let form = state.snapshot.get(id).map(ProductForm::from)?;
        state.editor = EditorMode::Editing(id);
        Some(form)
    }

    /// Submit the form: update when it carries an id, create otherwise.
    ///
    /// The editor closes on commit and stays open on any failure so the
    /// operator can correct and retry. A commit that arrives after the
    /// operator has moved to another session leaves that session open.
    pub async fn save(&self, form: &ProductForm) -> Result<Product, SaveError> {
        let (saved, session) = match form.id {
            Some(id) => (self.update(id, form).await?, EditorMode::Editing(id)),
            None => (self.create(form).await?, EditorMode::Creating),
        };
        let mut state = self.state.write().await;
        if state.editor == session {
            state.editor = EditorMode::Closed;
        }
        Ok(saved)
    }

    pub async fn cancel_edit(&self) {
        self.state.write().await.editor = EditorMode::Closed;
    }

    pub async fn editor(&self) -> EditorMode {
        self.state.read().await.editor
    }

    // ---- preview ----

    /// Select product `id` for detailed display and return it.
    pub async fn open_preview(&self, id: ProductId) -> Option<Product> {
        let mut state = self.state.write().await;
        let product = state.snapshot.get(id).cloned()?;
        state.preview = Some(id);
        Some(product)
    }

    /// The previewed product as currently held in the snapshot. Reflects
    /// committed updates and becomes `None` once the product is removed.
    pub async fn preview(&self) -> Option<Product> {
        let state = self.state.read().await;
        state.preview.and_then(|id| state.snapshot.get(id).cloned())
    }

    pub async fn close_preview(&self) {
        self.state.write().await.preview = None;
    }
}
