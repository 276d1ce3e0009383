//! The catalog view-model.
//!
//! [`CatalogViewModel`] is the single owner of the dashboard's catalog
//! state. It is constructed explicitly with a [`CatalogService`] and dropped
//! at shutdown; nothing about it is global.
//!
//! Mutations are never applied optimistically. While a request is pending
//! the snapshot keeps its pre-mutation contents; on success the server's
//! returned representation is committed, on failure the snapshot is left
//! untouched and the error slot is set. State is guarded by an async
//! `RwLock` that is never held across a request, so several mutations can
//! be in flight at once. Commits for the same id land in arrival order
//! (last commit wins).

use catalog_client::{CatalogService, TransportError};
use catalog_core::{
    CatalogSnapshot, CategorySet, FilterState, Product, ProductForm, ProductId, ProductPatch,
};
use tokio::sync::RwLock;

use crate::editor::EditorMode;
use crate::error::SaveError;
use crate::mutation::{MutationKind, MutationLog, MutationPhase, PendingMutation};

/// Number of independent fetches issued by [`CatalogViewModel::initialize`].
const INITIAL_FETCHES: usize = 2;

const NOT_FOUND: u16 = 404;

/// Everything the view-model owns, behind one lock.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) snapshot: CatalogSnapshot,
    pub(crate) categories: CategorySet,
    pub(crate) filter: FilterState,
    /// Initial fetches that have not settled yet.
    pub(crate) pending_loads: usize,
    /// Most recent transport failure. Last failure wins.
    pub(crate) last_error: Option<String>,
    pub(crate) mutations: MutationLog,
    pub(crate) editor: EditorMode,
    pub(crate) preview: Option<ProductId>,
}

impl CatalogState {
    fn record_error(&mut self, error: &TransportError) {
        self.last_error = Some(error.to_string());
    }
}

/// In-memory catalog kept in sync with a remote store.
pub struct CatalogViewModel<S> {
    service: S,
    pub(crate) state: RwLock<CatalogState>,
}

impl<S: CatalogService> CatalogViewModel<S> {
    /// Create an empty view-model backed by `service`.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// The injected catalog service.
    pub fn service(&self) -> &S {
        &self.service
    }

    // ---- loading ----

    /// Fetch products and categories concurrently.
    ///
    /// Each fetch commits its own slice as soon as it settles; a failure of
    /// one does not affect the other. [`is_loading`](Self::is_loading)
    /// reports `true` until both have settled.
    pub async fn initialize(&self) {
        self.state.write().await.pending_loads += INITIAL_FETCHES;
        tokio::join!(self.load_products(), self.load_categories());
    }

    async fn load_products(&self) {
        let result = self.service.list_products().await;
        let mut state = self.state.write().await;
        state.pending_loads = state.pending_loads.saturating_sub(1);
        match result {
            Ok(products) => {
                state.snapshot = CatalogSnapshot::from_products(products);
                tracing::info!(count = state.snapshot.len(), "Catalog loaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                state.record_error(&e);
            }
        }
    }

    async fn load_categories(&self) {
        let result = self.service.list_categories().await;
        let mut state = self.state.write().await;
        state.pending_loads = state.pending_loads.saturating_sub(1);
        match result {
            Ok(names) => {
                state.categories = CategorySet::from_names(names);
                tracing::info!(count = state.categories.len(), "Categories loaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load categories");
                state.record_error(&e);
            }
        }
    }

    // ---- mutations ----

    /// Validate `form` and create the product it describes.
    ///
    /// On commit the server's product is prepended to the snapshot.
    pub async fn create(&self, form: &ProductForm) -> Result<Product, SaveError> {
        let draft = form.validate()?;
        let ticket = self.begin(MutationKind::Create, None).await;

        let result = self.service.create_product(&draft).await;

        let mut state = self.state.write().await;
        match result {
            Ok(product) => {
                tracing::info!(product_id = product.id, title = %product.title, "Product created");
                state.snapshot.prepend(product.clone());
                state.mutations.settle(ticket, MutationPhase::Committed);
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create failed");
                state.record_error(&e);
                state.mutations.settle(ticket, MutationPhase::Failed);
                Err(e.into())
            }
        }
    }

    /// Validate `form` and send it as a full update of product `id`.
    ///
    /// On commit the entry at `id` is replaced in place by the server's
    /// product. If the entry has been removed meanwhile, or the server
    /// answers with a different id, the commit is dropped.
    pub async fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, SaveError> {
        let patch = ProductPatch::from(form.validate()?);
        let ticket = self.begin(MutationKind::Update, Some(id)).await;

        let result = self.service.update_product(id, &patch).await;

        let mut state = self.state.write().await;
        match result {
            Ok(product) if product.id != id => {
                tracing::warn!(
                    product_id = id,
                    returned_id = product.id,
                    "Update answered with a different product id; not applied"
                );
                state.mutations.settle(ticket, MutationPhase::Committed);
                Ok(product)
            }
            Ok(product) => {
                if state.snapshot.replace(product.clone()) {
                    tracing::info!(product_id = product.id, "Product updated");
                } else {
                    tracing::debug!(
                        product_id = product.id,
                        "Update committed for a product no longer in the catalog"
                    );
                }
                state.mutations.settle(ticket, MutationPhase::Committed);
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "Update failed");
                state.record_error(&e);
                state.mutations.settle(ticket, MutationPhase::Failed);
                Err(e.into())
            }
        }
    }

    /// Delete product `id` and drop it from the snapshot.
    ///
    /// Removing an id that is not in the snapshot is a no-op. A 404 for such
    /// an id (a double delete) is tolerated as well; any other failure is
    /// reported.
    pub async fn remove(&self, id: ProductId) -> Result<(), TransportError> {
        let ticket = self.begin(MutationKind::Delete, Some(id)).await;

        let result = self.service.delete_product(id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                if state.snapshot.remove(id).is_some() {
                    tracing::info!(product_id = id, "Product deleted");
                } else {
                    tracing::debug!(product_id = id, "Delete committed for an absent product");
                }
                state.mutations.settle(ticket, MutationPhase::Committed);
                Ok(())
            }
            Err(e) if e.status() == Some(NOT_FOUND) && !state.snapshot.contains(id) => {
                tracing::debug!(product_id = id, error = %e, "Ignoring failed delete of an absent product");
                state.mutations.settle(ticket, MutationPhase::Committed);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(product_id = id, error = %e, "Delete failed");
                state.record_error(&e);
                state.mutations.settle(ticket, MutationPhase::Failed);
                Err(e)
            }
        }
    }

    async fn begin(&self, kind: MutationKind, product_id: Option<ProductId>) -> u64 {
        self.state.write().await.mutations.begin(kind, product_id)
    }

    // ---- filters ----

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.filter.search_term = term.into();
    }

    /// Select a category, or `None` for all categories. An empty name is
    /// treated as "all categories".
    pub async fn set_category_filter(&self, category: Option<String>) {
        self.state.write().await.filter.category = category.filter(|c| !c.is_empty());
    }

    pub async fn filter(&self) -> FilterState {
        self.state.read().await.filter.clone()
    }

    // ---- derived views ----

    /// Snapshot entries matching the current search term and category, in
    /// snapshot order. Recomputed on every call.
    pub async fn filtered_products(&self) -> Vec<Product> {
        let state = self.state.read().await;
        state
            .filter
            .apply(state.snapshot.products())
            .into_iter()
            .cloned()
            .collect()
    }

    /// The full snapshot.
    pub async fn products(&self) -> Vec<Product> {
        self.state.read().await.snapshot.products().to_vec()
    }

    pub async fn product(&self, id: ProductId) -> Option<Product> {
        self.state.read().await.snapshot.get(id).cloned()
    }

    pub async fn categories(&self) -> CategorySet {
        self.state.read().await.categories.clone()
    }

    /// `true` from [`initialize`](Self::initialize) until both fetches settle.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.pending_loads > 0
    }

    // ---- errors & mutation status ----

    /// Message of the most recent transport failure, if any.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn clear_error(&self) {
        self.state.write().await.last_error = None;
    }

    /// `Pending` while any mutation is in flight, otherwise the outcome of
    /// the last settled mutation.
    pub async fn mutation_phase(&self) -> MutationPhase {
        self.state.read().await.mutations.phase()
    }

    pub async fn pending_mutations(&self) -> Vec<PendingMutation> {
        self.state.read().await.mutations.pending()
    }
}
