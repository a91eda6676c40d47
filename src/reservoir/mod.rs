//! Cyclic reservoir: walk an ordered list one item at a time, copying as it goes.


use crate::text::clean_lines;
use serde::Serialize;
use tracing::debug;

/// Ordered items plus a cursor clamped to `[0, len-1]`.
///
/// The items are the trimmed, non-empty lines of the source text, or the
/// default pool when the source has none.
#[derive(Debug, Clone)]
pub struct Reservoir {
    source: String,
    items: Vec<String>,
    default_pool: Vec<String>,
    cursor: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservoirView {
    pub source: String,
    pub current: Option<String>,
    pub cursor: usize,
    pub len: usize,
    pub progress: f32,
    pub using_default_pool: bool,
}

impl Reservoir {
    pub fn new(default_pool: Vec<String>) -> Self {
        Self {
            source: String::new(),
            items: default_pool.clone(),
            default_pool,
            cursor: 0,
        }
    }

    /// Replaces the source text and rewinds the cursor.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
        let lines = clean_lines(&self.source);
        self.items = if lines.is_empty() {
            self.default_pool.clone()
        } else {
            lines
        };
        self.cursor = 0;
        debug!(items = self.items.len(), default = self.is_using_default_pool(), "reservoir reloaded");
    }

    pub fn clear(&mut self) {
        self.set_source(String::new());
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    pub fn is_using_default_pool(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Returns the item to copy and moves forward, saturating at the last
    /// item. `None` when there is nothing to copy.
    pub fn advance(&mut self) -> Option<String> {
        let item = self.current()?.to_owned();
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
        Some(item)
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn next(&mut self) {
        let last = self.items.len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Fraction of the list reached, `(cursor + 1) / len`.
    pub fn progress(&self) -> f32 {
        if self.items.is_empty() {
            0.0
        } else {
            (self.cursor + 1) as f32 / self.items.len() as f32
        }
    }

    pub fn view(&self) -> ReservoirView {
        ReservoirView {
            source: self.source.clone(),
            current: self.current().map(str::to_owned),
            cursor: self.cursor,
            len: self.items.len(),
            progress: self.progress(),
            using_default_pool: self.is_using_default_pool(),
        }
    }
}
