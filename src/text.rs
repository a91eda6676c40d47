//! Line and block splitting shared by every utility.

use regex::Regex;
use std::sync::OnceLock;

/// Splits `input` into trimmed, non-empty lines.
pub fn clean_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn block_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    // A whitespace run containing at least two newlines.
    SEPARATOR.get_or_init(|| Regex::new(r"\n\s*\n").expect("static block separator pattern"))
}

/// Splits `input` into blank-line separated blocks, trimmed, empties dropped.
pub fn split_blocks(input: &str) -> Vec<String> {
    let normalized = input.replace("\r\n", "\n");
    block_separator()
        .split(&normalized)
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lines_trims_and_drops_blanks() {
        let raw = "  alpha \n\n\t\nbeta\n   gamma   \n";
        assert_eq!(clean_lines(raw), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn clean_lines_on_whitespace_is_empty() {
        assert!(clean_lines(" \n \t \n").is_empty());
    }

    #[test]
    fn blocks_split_on_blank_lines_only() {
        let raw = "one\ntwo\n\nthree\n  \n\n four \n";
        assert_eq!(split_blocks(raw), vec!["one\ntwo", "three", "four"]);
    }

    #[test]
    fn single_newline_keeps_block_together() {
        assert_eq!(split_blocks("a\nb\nc"), vec!["a\nb\nc"]);
    }

    #[test]
    fn crlf_input_is_split_like_lf() {
        assert_eq!(split_blocks("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n   \n").is_empty());
    }
}
