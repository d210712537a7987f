//! Shared text heuristics used by both the validator and the suggestion
//! analyzers. All functions are pure and operate on form-field sized strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::WEAK_WORDS;

/// Quantified-metric patterns: "40%", "3x", "$500", "100+".
static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\d+x|\$\d+|\d+\+").expect("metric pattern is valid"));

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Number of quantified-metric occurrences ("N%", "Nx", "$N", "N+") in the text.
pub fn metric_mentions(text: &str) -> usize {
    METRIC_RE.find_iter(text).count()
}

/// Splits newline-delimited highlight text into trimmed, non-blank bullets.
pub fn split_bullets(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// First word of a bullet with trailing punctuation stripped, if any.
pub fn leading_word(bullet: &str) -> Option<&str> {
    bullet
        .split_whitespace()
        .next()
        .map(|w| w.trim_end_matches(['.', ',', ';', ':']))
}

/// Weak phrases present in the text (case-insensitive substring match),
/// in lexicon order.
pub fn weak_phrases_in(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    WEAK_WORDS
        .iter()
        .copied()
        .filter(|phrase| lower.contains(phrase))
        .collect()
}

pub fn contains_weak_phrase(text: &str) -> bool {
    !weak_phrases_in(text).is_empty()
}
