//! # Mock Framework
//!
//! Test doubles for the cart service's collaborators.
//!
//! - [`create_mock_catalog`] returns a catalog whose lookups arrive on a
//!   channel the test controls. Use [`expect_product`] / [`expect_stock`] to
//!   assert each lookup and answer it, which makes interleavings deterministic.
//! - [`StubCatalog`] answers lookups from fixed tables.
//! - [`RecordingNotifier`] keeps every notification for later assertions.
//! - [`FailingStorage`] reads like normal storage but refuses every write.
//! - [`UnreadableStorage`] fails every read but keeps what is written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actors::CartService;
use crate::catalog::{Catalog, CatalogError};
use crate::clients::CartClient;
use crate::domain::{CatalogProduct, ProductId, Stock};
use crate::notify::{Notification, Notifier};
use crate::storage::{MemoryStorage, Storage, StorageError};

pub const TEST_KEY: &str = "@RocketShoes:cart";

pub type Reply<T> = oneshot::Sender<Result<T, CatalogError>>;

#[derive(Debug)]
pub enum CatalogRequest {
    Product {
        id: ProductId,
        respond_to: Reply<CatalogProduct>,
    },
    Stock {
        id: ProductId,
        respond_to: Reply<Stock>,
    },
}

/// Catalog that forwards every lookup to a test-owned receiver.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    sender: mpsc::Sender<CatalogRequest>,
}

pub fn create_mock_catalog(buffer_size: usize) -> (MockCatalog, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockCatalog { sender }, receiver)
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Product { id, respond_to })
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        response.await.map_err(|e| CatalogError::Network(e.to_string()))?
    }

    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Stock { id, respond_to })
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        response.await.map_err(|e| CatalogError::Network(e.to_string()))?
    }
}

/// Helper to verify that the next lookup is a product lookup
pub async fn expect_product(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductId, Reply<CatalogProduct>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Product { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next lookup is a stock lookup
pub async fn expect_stock(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductId, Reply<Stock>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Stock { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Catalog backed by fixed tables. Unknown ids are `NotFound`.
#[derive(Debug, Default)]
pub struct StubCatalog {
    products: HashMap<ProductId, CatalogProduct>,
    stock: HashMap<ProductId, i64>,
    failure: Option<CatalogError>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, id: ProductId, title: &str, price: f64) -> Self {
        self.products.insert(
            id,
            CatalogProduct {
                id,
                title: title.to_string(),
                price,
                image: String::new(),
            },
        );
        self
    }

    pub fn with_stock(mut self, id: ProductId, amount: i64) -> Self {
        self.stock.insert(id, amount);
        self
    }

    /// Every lookup fails with `error`.
    pub fn failing(error: CatalogError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        self.products.get(&id).cloned().ok_or(CatalogError::NotFound(id))
    }

    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        self.stock
            .get(&id)
            .map(|amount| Stock::new(id, *amount))
            .ok_or(CatalogError::NotFound(id))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}

/// Storage whose reads succeed and whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
}

impl FailingStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryStorage::with_item(key, value),
        }
    }
}

impl Storage for FailingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
        })
    }
}

/// Storage whose reads always fail and whose writes succeed.
#[derive(Debug, Default)]
pub struct UnreadableStorage {
    inner: MemoryStorage,
}

impl UnreadableStorage {
    /// What was last written under `key`, bypassing the failing read path.
    pub fn written(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }
}

impl Storage for UnreadableStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }
}

/// Starts a cart service on the given collaborators and returns its client.
pub fn spawn_cart(
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn Storage>,
    notifier: Arc<RecordingNotifier>,
) -> CartClient {
    let (service, client) = CartService::new(8, catalog, storage, notifier, TEST_KEY);
    tokio::spawn(service.run());
    client
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog() {
        let (catalog, mut receiver) = create_mock_catalog(10);

        let lookup = tokio::spawn(async move { catalog.stock(4).await });

        let (id, responder) = expect_stock(&mut receiver).await.expect("Expected Stock lookup");
        assert_eq!(id, 4);
        responder.send(Ok(Stock::new(4, 2))).unwrap();

        assert_eq!(lookup.await.unwrap(), Ok(Stock::new(4, 2)));
    }

    #[tokio::test]
    async fn test_stub_catalog_unknown_ids() {
        let catalog = StubCatalog::new().with_product(1, "X", 10.0);
        assert!(catalog.product(1).await.is_ok());
        assert_eq!(catalog.stock(1).await, Err(CatalogError::NotFound(1)));
    }
}
