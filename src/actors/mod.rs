use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

use crate::cart_actor::logic::{self, AddLookup};
use crate::cart_actor::{CartError, CartOperation, UpdateProductAmount};
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::domain::{Cart, Product, ProductId};
use crate::messages::CartRequest;
use crate::notify::Notifier;
use crate::storage::Storage;

// =============================================================================
// CART SERVICE
// =============================================================================

/// Sole owner of the cart.
///
/// Requests are handled one at a time, so every mutation starts from the
/// snapshot left by the previous one. Each successful mutation is written to
/// storage first and only then published to subscribers.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
    cart: watch::Sender<Cart>,
}

impl CartService {
    /// Loads the persisted cart and returns the service with its client.
    pub fn new(
        buffer_size: usize,
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        storage_key: impl Into<String>,
    ) -> (Self, CartClient) {
        let storage_key = storage_key.into();
        let initial = load_cart(storage.as_ref(), &storage_key);

        let (sender, receiver) = mpsc::channel(buffer_size);
        let (cart, cart_rx) = watch::channel(initial);
        let service = Self {
            receiver,
            catalog,
            storage,
            notifier,
            storage_key,
            cart,
        };
        let client = CartClient::new(sender, cart_rx);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(items = self.cart.borrow().len(), "CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct { product_id, respond_to } => {
                    self.handle_add_product(product_id).await;
                    let _ = respond_to.send(());
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    self.handle_remove_product(product_id);
                    let _ = respond_to.send(());
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update).await;
                    let _ = respond_to.send(());
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(skip(self))]
    async fn handle_add_product(&mut self, product_id: ProductId) {
        debug!("Processing add_product request");
        let result = self.add_product(product_id).await;
        self.report(CartOperation::Add, result);
    }

    #[instrument(skip(self))]
    fn handle_remove_product(&self, product_id: ProductId) {
        debug!("Processing remove_product request");
        let result = logic::remove(&self.snapshot(), product_id)
            .and_then(|next| self.commit(next));
        self.report(CartOperation::Remove, result);
    }

    #[instrument(fields(product_id = update.product_id, amount = update.amount), skip(self, update))]
    async fn handle_update_product_amount(&mut self, update: UpdateProductAmount) {
        debug!("Processing update_product_amount request");
        let Some(requested) = logic::requested_amount(update.amount) else {
            debug!("Ignoring non-positive amount");
            return;
        };
        let result = self.update_product_amount(update.product_id, requested).await;
        self.report(CartOperation::Update, result);
    }

    async fn add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let current = self.snapshot();
        let next = match logic::add_lookup(&current, product_id) {
            AddLookup::Stock => {
                let stock = self.catalog.stock(product_id).await?;
                logic::increment(&current, product_id, &stock)?
            }
            AddLookup::Product => {
                let product = self.catalog.product(product_id).await?;
                logic::append(&current, product)
            }
        };
        self.commit(next)
    }

    async fn update_product_amount(
        &self,
        product_id: ProductId,
        requested: u64,
    ) -> Result<(), CartError> {
        let stock = self.catalog.stock(product_id).await?;
        let next = logic::set_amount(&self.snapshot(), product_id, requested, &stock)?;
        self.commit(next)
    }

    fn snapshot(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// Persists `next`, then publishes it.
    fn commit(&self, next: Cart) -> Result<(), CartError> {
        let payload = serde_json::to_string(&next)?;
        self.storage.set_item(&self.storage_key, &payload)?;
        info!(items = next.len(), units = next.item_count(), "Cart updated");
        self.cart.send_replace(next);
        Ok(())
    }

    fn report(&self, operation: CartOperation, result: Result<(), CartError>) {
        if let Err(e) = result {
            match &e {
                CartError::OutOfStock { .. } | CartError::NotInCart(_) => {
                    warn!(?operation, error = %e, "Cart mutation rejected")
                }
                _ => error!(?operation, error = %e, "Cart mutation failed"),
            }
            self.notifier.notify(e.notification(operation));
        }
    }
}

/// Reads the persisted cart, starting empty when it is missing or unreadable.
fn load_cart(storage: &dyn Storage, key: &str) -> Cart {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            warn!(key, error = %e, "Could not read stored cart, starting empty");
            return Cart::new();
        }
    };
    match serde_json::from_str::<Vec<Product>>(&raw) {
        Ok(items) => Cart::from(items),
        Err(e) => {
            warn!(key, error = %e, "Stored cart is malformed, starting empty");
            Cart::new()
        }
    }
}
