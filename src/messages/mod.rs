use tokio::sync::oneshot;

use crate::cart_actor::UpdateProductAmount;
use crate::domain::ProductId;

/// Acknowledges that the cart service has finished handling a request.
///
/// Mutations carry no result: success or failure is observable only through
/// the published cart and the notifier.
pub type Ack = oneshot::Sender<()>;

/// Typed messages for the cart service. Each mutation carries a oneshot
/// channel that is fired once the request has been fully handled.
#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: Ack,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: Ack,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: Ack,
    },
    Shutdown,
}
