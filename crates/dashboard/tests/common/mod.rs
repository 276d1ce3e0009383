//! In-memory [`CatalogService`] used by the view-model integration tests.
//!
//! The fake behaves like the store API: it assigns ids on create, applies
//! patches on update and answers 404 for unknown ids. It also records every
//! call, can be told to fail an operation, and can hold the next response
//! back until the test releases it.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use catalog_client::{CatalogService, TransportError};
use catalog_core::{NewProduct, Product, ProductForm, ProductId, ProductPatch};
use catalog_dashboard::CatalogViewModel;

/// A recorded service call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListProducts,
    ListCategories,
    Create(NewProduct),
    Update(ProductId, ProductPatch),
    Delete(ProductId),
}

/// Operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListProducts,
    ListCategories,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<String>>,
    next_id: AtomicI64,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<Op>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    update_answer_id: Mutex<Option<ProductId>>,
}

#[derive(Clone, Default)]
pub struct FakeCatalog {
    inner: Arc<Inner>,
}

impl FakeCatalog {
    /// A store holding `products`; new ids continue after the largest one.
    pub fn with_products(products: Vec<Product>, categories: &[&str]) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Inner {
                products: Mutex::new(products),
                categories: Mutex::new(categories.iter().map(|c| c.to_string()).collect()),
                next_id: AtomicI64::new(next_id),
                ..Default::default()
            }),
        }
    }

    /// The two-product store used by most tests.
    pub fn seeded() -> Self {
        Self::with_products(
            vec![
                product(1, "Shirt", "clothing", 20.0),
                product(2, "Phone", "electronics", 500.0),
            ],
            &["clothing", "electronics"],
        )
    }

    pub async fn fail(&self, op: Op) {
        self.inner.failing.lock().await.insert(op);
    }

    pub async fn recover(&self, op: Op) {
        self.inner.failing.lock().await.remove(&op);
    }

    /// Hold back the response of the next call until the returned sender
    /// fires (or is dropped). The server-side effect happens immediately.
    pub async fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.inner.gate.lock().await = Some(rx);
        tx
    }

    /// Answer every following update with `id` in place of the target id.
    /// The stored product keeps its own id.
    pub async fn answer_updates_with_id(&self, id: ProductId) {
        *self.inner.update_answer_id.lock().await = Some(id);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().await.clone()
    }

    /// Products as stored server-side.
    pub async fn stored(&self) -> Vec<Product> {
        self.inner.products.lock().await.clone()
    }

    /// Yield until at least `n` calls have been recorded.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.inner.calls.lock().await.len() < n {
            tokio::task::yield_now().await;
        }
    }

    async fn record(&self, call: Call) {
        self.inner.calls.lock().await.push(call);
    }

    async fn is_failing(&self, op: Op) -> bool {
        self.inner.failing.lock().await.contains(&op)
    }

    /// Deliver `result`, waiting on the gate first if one is armed.
    async fn respond<T>(&self, result: Result<T, TransportError>) -> Result<T, TransportError> {
        let gate = self.inner.gate.lock().await.take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        result
    }
}

fn simulated_failure() -> TransportError {
    TransportError::Status {
        status: 500,
        body: "simulated failure".to_string(),
    }
}

fn not_found() -> TransportError {
    TransportError::Status {
        status: 404,
        body: "product not found".to_string(),
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        self.record(Call::ListProducts).await;
        if self.is_failing(Op::ListProducts).await {
            return self.respond(Err(simulated_failure())).await;
        }
        let products = self.stored().await;
        self.respond(Ok(products)).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, TransportError> {
        self.record(Call::ListCategories).await;
        if self.is_failing(Op::ListCategories).await {
            return self.respond(Err(simulated_failure())).await;
        }
        let categories = self.inner.categories.lock().await.clone();
        self.respond(Ok(categories)).await
    }

    async fn create_product(&self, draft: &NewProduct) -> Result<Product, TransportError> {
        self.record(Call::Create(draft.clone())).await;
        if self.is_failing(Op::Create).await {
            return self.respond(Err(simulated_failure())).await;
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let created = draft.clone().with_id(id);
        self.inner.products.lock().await.push(created.clone());
        self.respond(Ok(created)).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, TransportError> {
        self.record(Call::Update(id, patch.clone())).await;
        if self.is_failing(Op::Update).await {
            return self.respond(Err(simulated_failure())).await;
        }
        let answer_id = *self.inner.update_answer_id.lock().await;
        let result = {
            let mut products = self.inner.products.lock().await;
            match products.iter_mut().find(|p| p.id == id) {
                Some(existing) => {
                    patch.apply_to(existing);
                    let mut answer = existing.clone();
                    answer.id = answer_id.unwrap_or(id);
                    Ok(answer)
                }
                None => Err(not_found()),
            }
        };
        self.respond(result).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        self.record(Call::Delete(id)).await;
        if self.is_failing(Op::Delete).await {
            return self.respond(Err(simulated_failure())).await;
        }
        let result = {
            let mut products = self.inner.products.lock().await;
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() < before {
                Ok(())
            } else {
                Err(not_found())
            }
        };
        self.respond(result).await
    }
}

pub fn product(id: ProductId, title: &str, category: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: "d".to_string(),
        category: category.to_string(),
        image: "u".to_string(),
        rating: None,
    }
}

pub fn form(title: &str, price: f64, category: &str) -> ProductForm {
    ProductForm {
        id: None,
        title: title.to_string(),
        price: Some(price),
        description: "d".to_string(),
        category: category.to_string(),
        image: "u".to_string(),
    }
}

/// A view-model over `fake` that has completed `initialize`.
pub async fn loaded(fake: &FakeCatalog) -> CatalogViewModel<FakeCatalog> {
    let view_model = CatalogViewModel::new(fake.clone());
    view_model.initialize().await;
    view_model
}

pub fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id).collect()
}
