use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_DIR: &str = ".cart-store";
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Runtime settings for the cart system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the product/stock API.
    pub api_url: String,
    /// Directory holding the persisted cart.
    pub storage_dir: PathBuf,
    /// Key the serialized cart is stored under.
    pub storage_key: String,
    /// Request queue size of the cart service.
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl Config {
    /// Loads settings from the process environment, after applying a `.env`
    /// file if one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("CART_API_URL") {
            config.api_url = url;
        }
        if let Some(dir) = lookup("CART_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup("CART_STORAGE_KEY") {
            config.storage_key = key;
        }
        if let Some(buffer) = lookup("CART_CHANNEL_BUFFER") {
            config.channel_buffer = buffer
                .parse()
                .with_context(|| format!("invalid CART_CHANNEL_BUFFER: {buffer:?}"))?;
            anyhow::ensure!(config.channel_buffer > 0, "CART_CHANNEL_BUFFER must be positive");
        }
        Ok(config)
    }
}
