//! User-facing notifications raised by the cart.

use std::fmt;

use tracing::warn;

/// The fixed set of messages the cart can surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "Requested quantity out of stock",
            Notification::AddFailed => "Error adding product",
            Notification::RemoveFailed => "Error removing product",
            Notification::UpdateFailed => "Error updating product quantity",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Surfaces notifications as `warn` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        warn!(notification = %notification, kind = ?notification, "Notifying user");
    }
}
