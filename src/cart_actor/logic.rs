//! Pure snapshot transitions.
//!
//! Nothing here touches the network or storage. The cart service fetches
//! whatever a transition needs, calls in here, and persists the result.

use super::CartError;
use crate::domain::{Cart, CatalogProduct, Product, ProductId, Stock};

/// What `add_product` has to look up before it can decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddLookup {
    /// The product is already in the cart: check stock for one more unit.
    Stock,
    /// The product is new to the cart: fetch its record.
    Product,
}

pub fn add_lookup(cart: &Cart, id: ProductId) -> AddLookup {
    if cart.contains(id) {
        AddLookup::Stock
    } else {
        AddLookup::Product
    }
}

/// One more unit of a line item already in the cart.
pub fn increment(cart: &Cart, id: ProductId, stock: &Stock) -> Result<Cart, CartError> {
    let existing = cart.get(id).ok_or(CartError::NotInCart(id))?;
    let requested = u64::from(existing.amount) + 1;
    let amount = within_stock(id, requested, stock)?;
    Ok(cart.with_amount(id, amount))
}

/// A new line item with a single unit.
pub fn append(cart: &Cart, product: CatalogProduct) -> Cart {
    cart.with_item(Product::from_catalog(product, 1))
}

pub fn remove(cart: &Cart, id: ProductId) -> Result<Cart, CartError> {
    cart.without(id).ok_or(CartError::NotInCart(id))
}

/// Zero and negative amounts are not requests at all.
pub fn requested_amount(amount: i64) -> Option<u64> {
    u64::try_from(amount).ok().filter(|amount| *amount > 0)
}

/// Sets the line item `id` to exactly `requested` units.
///
/// An id that is not in the cart leaves every line item as it was.
pub fn set_amount(
    cart: &Cart,
    id: ProductId,
    requested: u64,
    stock: &Stock,
) -> Result<Cart, CartError> {
    let amount = within_stock(id, requested, stock)?;
    Ok(cart.with_amount(id, amount))
}

fn within_stock(id: ProductId, requested: u64, stock: &Stock) -> Result<u32, CartError> {
    let out_of_stock = || CartError::OutOfStock {
        product_id: id,
        requested,
        available: stock.amount,
    };
    if !stock.covers(requested) {
        return Err(out_of_stock());
    }
    u32::try_from(requested).map_err(|_| out_of_stock())
}
