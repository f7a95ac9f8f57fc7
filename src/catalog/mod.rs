//! Read-only access to the remote product and stock service.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::domain::{CatalogProduct, ProductId, Stock};

pub use error::CatalogError;
pub use http::HttpCatalog;

/// Product and stock lookups the cart validates against.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Full product record, as served by `GET /products/{id}`.
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError>;

    /// Live stock level, as served by `GET /stock/{id}`.
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError>;
}
