use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Instrument};

use cart_store::app_system::{setup_tracing, CartSystem, Config};
use cart_store::cart_actor::UpdateProductAmount;
use cart_store::ProductId;

/// Drive the storefront cart from the command line.
#[derive(Debug, Parser)]
#[command(name = "cart_store", version, about)]
struct Cli {
    /// Base URL of the product/stock API (overrides CART_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory holding the persisted cart (overrides CART_STORAGE_DIR)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(storage_dir) = cli.storage_dir {
        config.storage_dir = storage_dir;
    }

    let system = CartSystem::from_config(&config)?;
    let client = &system.cart_client;

    let span = tracing::info_span!("cart_command", command = ?cli.command);
    async {
        match cli.command {
            Command::Show => Ok(()),
            Command::Add { product_id } => client.add_product(product_id).await,
            Command::Remove { product_id } => client.remove_product(product_id).await,
            Command::Update { product_id, amount } => {
                client
                    .update_product_amount(UpdateProductAmount::new(product_id, amount))
                    .await
            }
        }
    }
    .instrument(span)
    .await?;

    let cart = client.cart();
    info!(items = cart.len(), units = cart.item_count(), total = cart.total(), "Cart ready");
    println!(
        "{}",
        serde_json::to_string_pretty(&cart).context("failed to render cart")?
    );

    system.shutdown().await
}
