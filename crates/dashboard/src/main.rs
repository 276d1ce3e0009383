//! `catalog-dashboard` -- headless product dashboard.
//!
//! Loads the catalog and categories from the store API, applies the
//! configured search and category filter, and prints the resulting product
//! table.
//!
//! # Environment variables
//!
//! | Variable                       | Required | Default                    | Description                    |
//! |--------------------------------|----------|----------------------------|--------------------------------|
//! | `CATALOG_API_URL`              | no       | `https://fakestoreapi.com` | Store API base URL             |
//! | `CATALOG_REQUEST_TIMEOUT_SECS` | no       | `30`                       | Per-request timeout            |
//! | `CATALOG_SEARCH`               | no       | --                         | Case-insensitive title filter  |
//! | `CATALOG_CATEGORY`             | no       | --                         | Exact category filter          |

use anyhow::Context;
use catalog_client::{CatalogApi, ClientConfig};
use catalog_dashboard::CatalogViewModel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Characters of description shown per row.
const EXCERPT_CHARS: usize = 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_dashboard=info,catalog_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("Invalid catalog client configuration")?;
    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout_secs,
        "Starting catalog-dashboard",
    );

    let api = CatalogApi::new(&config).context("Failed to build HTTP client")?;
    let view_model = CatalogViewModel::new(api);

    view_model.initialize().await;
    if let Some(error) = view_model.last_error().await {
        tracing::error!(%error, "Catalog did not load completely");
    }

    if let Ok(term) = std::env::var("CATALOG_SEARCH") {
        view_model.set_search_term(term).await;
    }
    view_model
        .set_category_filter(std::env::var("CATALOG_CATEGORY").ok())
        .await;

    let categories = view_model.categories().await;
    println!("Categories: {}", categories.names().join(", "));

    let products = view_model.filtered_products().await;
    println!("{:>4}  {:<40}  {:>10}  {:<18}  Description", "ID", "Title", "Price", "Category");
    for product in &products {
        println!(
            "{:>4}  {:<40}  {:>10}  {:<18}  {}",
            product.id,
            truncate(&product.title, 40),
            product.price_label(),
            product.category,
            product.excerpt(EXCERPT_CHARS),
        );
    }
    println!(
        "{} of {} products shown",
        products.len(),
        view_model.products().await.len()
    );

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
