// Text normalization — markup stripping, whitespace collapse, tokenization,
// and stop word removal.
//
// Everything downstream (phrase extraction, sentiment windows) operates on
// token streams produced here, so the guarantees are strict: no markup
// fragments, no stop words, no tokens shorter than 2 characters.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Baseline function words filtered regardless of what the upstream English
/// list contains. Tokenization must not depend on upstream list revisions.
const CORE_STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "for", "with", "from", "this", "that", "which",
    "what", "where", "when", "is", "are", "was", "were", "a", "an", "of",
    "to", "in", "on", "at", "by", "as", "it", "its", "be", "been", "has",
    "have", "had", "will", "would", "can", "could", "should", "your", "our",
    "their", "they", "you", "we",
];

/// Normalizes raw document text into clean, stop-word-free token streams.
///
/// Builds its stop word set and tag pattern once — construct one per
/// analysis run and reuse it across documents.
pub struct Tokenizer {
    stops: HashSet<String>,
    tag_pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let mut stops: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        for word in CORE_STOP_WORDS {
            stops.insert((*word).to_string());
        }
        Self {
            stops,
            // `<` through the next `>` — good enough for the markup fragments
            // that survive upstream content extraction
            tag_pattern: Regex::new(r"<[^>]*>").expect("tag pattern is valid"),
        }
    }

    /// Strip HTML-like tags, collapse whitespace runs, and lowercase.
    ///
    /// Tag spans are replaced with a space so words on either side of a tag
    /// don't fuse into one token.
    pub fn clean(&self, raw: &str) -> String {
        let without_tags = self.tag_pattern.replace_all(raw, " ");
        without_tags
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Split normalized text into word tokens.
    ///
    /// Splits on non-alphanumeric boundaries, drops tokens shorter than
    /// 2 characters, and removes stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .map(|t| t.to_lowercase())
            .filter(|t| !self.stops.contains(t))
            .collect()
    }

    /// Clean and tokenize in one step — the common path for documents.
    pub fn tokenize_raw(&self, raw: &str) -> Vec<String> {
        self.tokenize(&self.clean(raw))
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stops.contains(token)
    }
}
