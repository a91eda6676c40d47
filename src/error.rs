use thiserror::Error;

use crate::config::ConfigError;
use crate::platform::{ClipboardError, StorageError};

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),
    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("Clipboard failed: {0}")]
    Clipboard(#[from] ClipboardError),
}

pub type ToolkitResult<T> = Result<T, ToolkitError>;
