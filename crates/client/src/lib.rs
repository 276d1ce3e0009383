//! REST client for the remote product catalog.
//!
//! [`CatalogService`] declares the five catalog operations; [`CatalogApi`]
//! implements them over HTTP with [`reqwest`]. Each call is a single request
//! with no retry, caching or batching, and touches no local state.

pub mod api;
pub mod config;
pub mod error;
pub mod service;

pub use api::CatalogApi;
pub use config::{ClientConfig, ConfigError};
pub use error::TransportError;
pub use service::CatalogService;
