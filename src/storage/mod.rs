//! Key-value persistence for the serialized cart.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! whole-value overwrite on every write.

pub mod error;
pub mod file;
pub mod memory;

use std::fmt::Debug;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A string key-value store.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait Storage: Send + Sync + Debug {
    /// Returns `Ok(None)` if the key does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Inserts or overwrites a value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
