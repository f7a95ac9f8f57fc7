use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use super::Config;
use crate::actors::CartService;
use crate::catalog::{Catalog, HttpCatalog};
use crate::clients::CartClient;
use crate::notify::{Notifier, TracingNotifier};
use crate::storage::{FileStorage, Storage};

/// The running cart: the service task plus a client to talk to it.
///
/// Responsible for wiring the collaborators together and for shutdown.
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Starts the cart service. Must be called inside a tokio runtime.
    pub fn new(
        config: &Config,
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (service, cart_client) = CartService::new(
            config.channel_buffer,
            catalog,
            storage,
            notifier,
            config.storage_key.clone(),
        );
        let handle = tokio::spawn(service.run());
        Self { cart_client, handle }
    }

    /// Starts the cart service against the HTTP API and file storage named
    /// in `config`, reporting notifications through tracing.
    pub fn from_config(config: &Config) -> Result<Self> {
        info!(api_url = %config.api_url, storage_dir = %config.storage_dir.display(), "Starting cart system");
        let catalog = HttpCatalog::new(config.api_url.clone());
        let storage = FileStorage::open(&config.storage_dir).with_context(|| {
            format!("failed to open cart storage at {:?}", config.storage_dir)
        })?;
        Ok(Self::new(
            config,
            Arc::new(catalog),
            Arc::new(storage),
            Arc::new(TracingNotifier),
        ))
    }

    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down cart system...");
        // The service may already be gone; joining below reports why.
        let _ = self.cart_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!("Cart service task failed: {:?}", e);
            return Err(e).context("cart service task failed");
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
