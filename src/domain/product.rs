use serde::{Deserialize, Serialize};

/// Identifier shared by the catalog, the stock service and cart line items.
pub type ProductId = u64;

/// A product as returned by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

/// A cart line item: a catalog product plus the quantity held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub amount: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            amount,
        }
    }

    /// Builds a line item from a catalog record.
    pub fn from_catalog(product: CatalogProduct, amount: u32) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}
