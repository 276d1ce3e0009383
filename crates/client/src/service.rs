use async_trait::async_trait;
use catalog_core::{NewProduct, Product, ProductId, ProductPatch};

use crate::error::TransportError;

/// The remote catalog operations the dashboard depends on.
///
/// Implemented by [`CatalogApi`](crate::CatalogApi) for the real store API.
/// The view-model is generic over this trait so it can be driven by any
/// implementation.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// `GET /products`, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, TransportError>;

    /// `GET /products/categories`.
    async fn list_categories(&self) -> Result<Vec<String>, TransportError>;

    /// `POST /products`. Returns the persisted product with its new id.
    async fn create_product(&self, draft: &NewProduct) -> Result<Product, TransportError>;

    /// `PUT /products/{id}`. Returns the server's resulting product.
    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, TransportError>;

    /// `DELETE /products/{id}`. Not guaranteed to be idempotent.
    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError>;
}
