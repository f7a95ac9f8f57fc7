use serde::{Deserialize, Serialize};

use super::ProductId;

/// Maximum purchasable quantity for a product, as reported by `GET /stock/{id}`.
///
/// The service may report zero or negative levels; both cover nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Whether `requested` units fit in the available stock.
    pub fn covers(&self, requested: u64) -> bool {
        i64::try_from(requested).map_or(false, |requested| requested <= self.amount)
    }
}
