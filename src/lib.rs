//! # cart-store
//!
//! Client-side shopping cart state for a storefront.
//!
//! - **Domain types** - line items, stock levels and cart snapshots → [`domain::Cart`]
//! - **Decision logic** - pure snapshot transitions, no I/O → [`cart_actor::logic`]
//! - **Cart service** - the single owner of the cart, persisting then publishing
//!   every mutation → [`actors::CartService`]
//! - **Client** - cloneable handle for reading, subscribing and mutating → [`clients::CartClient`]
//! - **Collaborators** - product/stock lookups ([`catalog::Catalog`]), key-value
//!   persistence ([`storage::Storage`]) and user notifications ([`notify::Notifier`])
//! - **System** - configuration, wiring, tracing and shutdown → [`app_system::CartSystem`]
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use cart_store::app_system::{CartSystem, Config};
//! use cart_store::cart_actor::UpdateProductAmount;
//!
//! let system = CartSystem::from_config(&Config::from_env()?)?;
//! system.cart_client.add_product(1).await?;
//! system.cart_client.update_product_amount(UpdateProductAmount::new(1, 3)).await?;
//! println!("{} units in cart", system.cart_client.cart().item_count());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod catalog;
pub mod storage;
pub mod notify;
pub mod cart_actor;
pub mod messages;
pub mod clients;
pub mod actors;
pub mod app_system;

#[cfg(test)]
mod mock_framework;

pub use actors::CartService;
pub use clients::CartClient;
pub use domain::{Cart, Product, ProductId, Stock};
