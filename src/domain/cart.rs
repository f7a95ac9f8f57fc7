use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// An ordered snapshot of cart line items, unique by product id.
///
/// Snapshots are never edited in place: every mutation builds a new `Cart`,
/// which the cart service persists and then publishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the amounts of every line item.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn subtotal(&self, id: ProductId) -> Option<f64> {
        self.get(id).map(Product::subtotal)
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Returns a new snapshot with `item` appended, or replacing the line
    /// item that already carries its id.
    pub fn with_item(&self, item: Product) -> Cart {
        let mut items = self.items.clone();
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Cart { items }
    }

    /// Returns a new snapshot where the line item `id` carries `amount`.
    /// Other line items pass through unchanged.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Product { amount, ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Returns a new snapshot without the line item `id`, or `None` when the
    /// cart holds no such item.
    pub fn without(&self, id: ProductId) -> Option<Cart> {
        if !self.contains(id) {
            return None;
        }
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        Some(Cart { items })
    }
}

impl From<Vec<Product>> for Cart {
    /// Later duplicates of an id are dropped so the snapshot stays unique.
    fn from(products: Vec<Product>) -> Self {
        products
            .into_iter()
            .fold(Cart::new(), |cart, item| {
                if cart.contains(item.id) {
                    cart
                } else {
                    let mut items = cart.items;
                    items.push(item);
                    Cart { items }
                }
            })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
