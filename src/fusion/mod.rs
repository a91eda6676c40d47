//! Sentence/link fusion with optional sentence shuffling and auto-fill.

pub mod merger;


pub use merger::{auto_fill, merge, pair_round_robin};

use crate::text::clean_lines;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Both raw inputs, the shuffle flag and the derived result, recomputed on
/// every change.
#[derive(Debug, Clone, Default)]
pub struct FusionMerger {
    sentences: String,
    links: String,
    shuffle: bool,
    result: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FusionView {
    pub sentences: String,
    pub links: String,
    pub shuffle: bool,
    pub result: String,
}

impl FusionMerger {
    pub fn sentences(&self) -> Vec<String> {
        clean_lines(&self.sentences)
    }

    pub fn links(&self) -> Vec<String> {
        clean_lines(&self.links)
    }

    pub fn sentence_text(&self) -> &str {
        &self.sentences
    }

    pub fn link_text(&self) -> &str {
        &self.links
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn set_sentences<R: Rng + ?Sized>(&mut self, text: impl Into<String>, rng: &mut R) {
        self.sentences = text.into();
        self.recompute(rng);
    }

    pub fn set_links<R: Rng + ?Sized>(&mut self, text: impl Into<String>, rng: &mut R) {
        self.links = text.into();
        self.recompute(rng);
    }

    pub fn set_shuffle<R: Rng + ?Sized>(&mut self, shuffle: bool, rng: &mut R) {
        self.shuffle = shuffle;
        self.recompute(rng);
    }

    pub fn wipe_links<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_links(String::new(), rng);
    }

    /// Pads the stored sentences to the link count. Returns whether the
    /// sentence text changed.
    pub fn auto_fill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match auto_fill(&self.sentences(), self.links().len()) {
            Some(filled) => {
                self.set_sentences(filled.join("\n"), rng);
                true
            }
            None => false,
        }
    }

    fn recompute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let sentences = self.sentences();
        let links = self.links();
        self.result = merge(&sentences, &links, self.shuffle, rng);
        debug!(
            sentences = sentences.len(),
            links = links.len(),
            shuffle = self.shuffle,
            "fusion recomputed"
        );
    }

    pub fn view(&self) -> FusionView {
        FusionView {
            sentences: self.sentences.clone(),
            links: self.links.clone(),
            shuffle: self.shuffle,
            result: self.result.clone(),
        }
    }
}
