//! HTTP implementation of [`CatalogService`].
//!
//! Wraps the store API's product endpoints using [`reqwest`]:
//!
//! | Operation       | Method | Path                   |
//! |-----------------|--------|------------------------|
//! | list            | GET    | `/products`            |
//! | list categories | GET    | `/products/categories` |
//! | create          | POST   | `/products`            |
//! | update          | PUT    | `/products/{id}`       |
//! | delete          | DELETE | `/products/{id}`       |

use async_trait::async_trait;
use catalog_core::{NewProduct, Product, ProductId, ProductPatch};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::service::CatalogService;

/// HTTP client for one store API base URL.
pub struct CatalogApi {
    client: reqwest::Client,
    api_url: String,
}

impl CatalogApi {
    /// Create a client from configuration, applying the request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.api_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.api_url, id)
    }
}

/// Turn a non-2xx store answer into [`TransportError::Status`], keeping the
/// body text the store sent with it.
async fn reject_failure(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(text) => text,
        Err(_) => String::from("<unreadable body>"),
    };
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Decode a product or category payload from a successful answer.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TransportError> {
    let response = reject_failure(response).await?;
    Ok(response.json::<T>().await?)
}

/// Delete answers carry the removed product, which the catalog ignores.
async fn discard_body(response: reqwest::Response) -> Result<(), TransportError> {
    reject_failure(response).await.map(drop)
}

#[async_trait]
impl CatalogService for CatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        tracing::debug!(url = %self.api_url, "Listing products");
        let response = self.client.get(self.products_url()).send().await?;
        read_json(response).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, TransportError> {
        tracing::debug!(url = %self.api_url, "Listing categories");
        let response = self
            .client
            .get(format!("{}/products/categories", self.api_url))
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_product(&self, draft: &NewProduct) -> Result<Product, TransportError> {
        tracing::debug!(title = %draft.title, "Creating product");
        let response = self
            .client
            .post(self.products_url())
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, TransportError> {
        tracing::debug!(product_id = id, "Updating product");
        let response = self
            .client
            .put(self.product_url(id))
            .json(patch)
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError> {
        tracing::debug!(product_id = id, "Deleting product");
        let response = self.client.delete(self.product_url(id)).send().await?;
        discard_body(response).await
    }
}
