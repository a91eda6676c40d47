//! Round-robin pairing of sentences with links.

use rand::seq::SliceRandom;
use rand::Rng;

/// Merges sentences and links into output text.
///
/// * no links: the sentences joined by newline;
/// * otherwise one `"<sentence> <link>"` line per link, in link order, with
///   sentences reused round-robin (or empty when there are none).
///
/// With `shuffle` the sentence order is permuted first (uniform Fisher–Yates).
pub fn merge<R: Rng + ?Sized>(
    sentences: &[String],
    links: &[String],
    shuffle: bool,
    rng: &mut R,
) -> String {
    if sentences.is_empty() && links.is_empty() {
        return String::new();
    }

    let mut ordered = sentences.to_vec();
    if shuffle {
        ordered.shuffle(rng);
    }

    if links.is_empty() {
        return ordered.join("\n");
    }

    pair_round_robin(&ordered, links).join("\n")
}

/// One line per link, pairing link `k` with `sentences[k % len]`.
pub fn pair_round_robin(sentences: &[String], links: &[String]) -> Vec<String> {
    links
        .iter()
        .enumerate()
        .map(|(k, link)| {
            let sentence = if sentences.is_empty() {
                ""
            } else {
                sentences[k % sentences.len()].as_str()
            };
            format!("{sentence} {link}").trim().to_owned()
        })
        .collect()
}

/// Sentences padded with round-robin repeats up to `link_count`.
///
/// `None` when there is nothing to do: no links, no sentences, or already
/// enough sentences.
pub fn auto_fill(sentences: &[String], link_count: usize) -> Option<Vec<String>> {
    if link_count == 0 || sentences.is_empty() || sentences.len() >= link_count {
        return None;
    }
    let needed = link_count - sentences.len();
    let mut filled = sentences.to_vec();
    filled.extend((0..needed).map(|i| sentences[i % sentences.len()].clone()));
    Some(filled)
}
