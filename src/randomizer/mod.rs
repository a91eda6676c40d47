//! Group randomizer: pick one blank-line separated block at random.

use crate::text::split_blocks;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Uniformly picks one block of `raw`, or `None` when it has no blocks.
pub fn pick<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Option<String> {
    let groups = split_blocks(raw);
    let picked = groups.choose(rng).cloned();
    debug!(groups = groups.len(), picked = picked.is_some(), "group pick");
    picked
}

/// Raw block text plus the last successful pick.
#[derive(Debug, Clone, Default)]
pub struct GroupRandomizer {
    input: String,
    selected: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RandomizerView {
    pub input: String,
    pub selected: Option<String>,
}

impl GroupRandomizer {
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replaces the selection with a fresh pick. An input without blocks
    /// keeps the previous selection and returns `None`.
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let picked = pick(&self.input, rng)?;
        self.selected = Some(picked);
        self.selected.as_deref()
    }

    pub fn view(&self) -> RandomizerView {
        RandomizerView {
            input: self.input.clone(),
            selected: self.selected.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_blocks_means_no_selection() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick("", &mut rng), None);
        assert_eq!(pick("  \n\n \t\n", &mut rng), None);
    }

    #[test]
    fn picks_one_of_the_blocks() {
        let mut rng = StdRng::seed_from_u64(2);
        let raw = "first block\nline two\n\nsecond\n\n\n third ";
        let blocks = ["first block\nline two", "second", "third"];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked = pick(raw, &mut rng).unwrap();
            let idx = blocks.iter().position(|b| *b == picked).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn single_block_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick("\n only \n", &mut rng).as_deref(), Some("only"));
    }

    #[test]
    fn empty_input_keeps_previous_selection() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut randomizer = GroupRandomizer::default();
        randomizer.set_input("keep me");
        assert_eq!(randomizer.pick(&mut rng), Some("keep me"));

        randomizer.set_input("   ");
        assert_eq!(randomizer.pick(&mut rng), None);
        assert_eq!(randomizer.selected(), Some("keep me"));
    }
}
