use thiserror::Error;

use super::CartOperation;
use crate::catalog::CatalogError;
use crate::domain::ProductId;
use crate::notify::Notification;
use crate::storage::StorageError;

/// Reasons a cart mutation did not produce a new snapshot.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: i64,
    },
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CartError {
    /// The message shown to the user when `operation` fails with this error.
    pub fn notification(&self, operation: CartOperation) -> Notification {
        match self {
            CartError::OutOfStock { .. } => Notification::OutOfStock,
            _ => operation.failure_notification(),
        }
    }
}
