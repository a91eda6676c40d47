//! Clipboard sinks. Writes are best-effort; callers log and move on.

use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps every write in memory. Clones share the same history, so a test
/// can hold one handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().ok()?.last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
            .push(text.to_owned());
        Ok(())
    }
}

/// OS clipboard through `arboard`. A handle is opened per write.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
