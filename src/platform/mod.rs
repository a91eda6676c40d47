//! Side-effect adapters: clipboard writes and the durable key-value store.

pub mod clipboard;
pub mod store;


pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

use crate::config::StorageConfig;

/// File-backed store when a path is configured, in-memory otherwise.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>, StorageError> {
    match &config.path {
        Some(path) => Ok(Box::new(FileStore::open(path)?)),
        None => Ok(Box::new(MemoryStore::new())),
    }
}
