use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::app_system::ClientError;
use crate::cart_actor::UpdateProductAmount;
use crate::domain::{Cart, ProductId};
use crate::messages::CartRequest;

/// Handle to the cart service.
///
/// Reads are served from the latest published snapshot without a round trip.
/// Mutations go through the service and resolve once it has handled them.
#[derive(Debug, Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    cart: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, cart: watch::Receiver<Cart>) -> Self {
        Self { sender, cart }
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// A receiver that is notified every time a new snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.cart.clone()
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        debug!("Sending request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| ClientError::ActorCommunicationError("Cart service closed".to_string()))
    }
}

client_method!(CartClient => fn add_product(product_id: ProductId) as CartRequest::AddProduct);
client_method!(CartClient => fn remove_product(product_id: ProductId) as CartRequest::RemoveProduct);
client_method!(CartClient => fn update_product_amount(update: UpdateProductAmount) as CartRequest::UpdateProductAmount);
