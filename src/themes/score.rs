// Theme scoring — confidence, category, and sentiment for extracted phrases.
//
// Confidence blends frequency and source diversity, both normalized against
// the current run (max frequency, total source count). Category and sentiment
// come from ordered lexical cue rules; when no cue matches they stay unset
// rather than falling back to a default.

use std::collections::HashSet;

use uuid::Uuid;

use super::extract::PhraseStats;
use super::model::{ExtractedTheme, Sentiment, ThemeCategory};
use crate::content::Document;
use crate::text::Tokenizer;

/// How many tokens on each side of a phrase occurrence count as its
/// sentiment context.
const SENTIMENT_WINDOW: usize = 5;

/// Category cue rules, evaluated in order — the first rule whose cue stems
/// prefix-match any phrase token wins.
const CATEGORY_RULES: &[(&[&str], ThemeCategory)] = &[
    (
        &["unique", "exclusive", "proprietary", "patented", "unmatched", "only"],
        ThemeCategory::ValueProposition,
    ),
    (
        &["save", "reduce", "faster", "improve", "increase", "boost", "grow", "streamline"],
        ThemeCategory::Benefit,
    ),
    (
        &["struggle", "problem", "frustrat", "pain", "difficult", "challenge"],
        ThemeCategory::Problem,
    ),
    (
        &["proven", "result", "testimonial", "trusted", "award", "certified", "guarantee"],
        ThemeCategory::Proof,
    ),
];

const POSITIVE_CUES: &[&str] = &[
    "excellent", "amazing", "best", "outstanding", "love", "delight", "success",
];
const NEGATIVE_CUES: &[&str] = &[
    "struggling", "difficult", "painful", "worst", "frustrating", "failing", "poor",
];

/// Score a batch of extracted phrases against their corpus.
///
/// `documents` must be the same corpus the stats were extracted from — the
/// run's max frequency and total source count normalize the confidence, and
/// the document token streams provide sentiment context.
pub fn score_themes(
    stats: Vec<PhraseStats>,
    tokenizer: &Tokenizer,
    documents: &[Document],
) -> Vec<ExtractedTheme> {
    let max_frequency = stats.iter().map(|s| s.frequency).max().unwrap_or(1);
    let total_sources = documents
        .iter()
        .map(|d| d.source_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    // Tokenize each document once; every phrase scans these streams
    let doc_tokens: Vec<Vec<String>> = documents
        .iter()
        .map(|d| tokenizer.tokenize_raw(&d.text))
        .collect();

    stats
        .into_iter()
        .map(|s| {
            let confidence = confidence(s.frequency, s.source_ids.len(), max_frequency, total_sources);
            let category = detect_category(&s.tokens);
            let sentiment = detect_sentiment(&s.tokens, &doc_tokens);
            ExtractedTheme {
                id: Uuid::new_v4(),
                theme: s.phrase,
                frequency: s.frequency,
                source_ids: s.source_ids,
                confidence,
                keywords: s.tokens,
                category,
                sentiment,
            }
        })
        .collect()
}

/// Confidence in [0,1], monotonically non-decreasing in both frequency and
/// source diversity:
///
///   0.5 * log2(freq+1)/log2(max_freq+1) + 0.5 * sources/total_sources
pub fn confidence(
    frequency: u32,
    source_count: usize,
    max_frequency: u32,
    total_sources: usize,
) -> f64 {
    let freq_component = if max_frequency == 0 {
        0.0
    } else {
        f64::from(frequency + 1).log2() / f64::from(max_frequency + 1).log2()
    };
    let diversity_component = if total_sources == 0 {
        0.0
    } else {
        source_count as f64 / total_sources as f64
    };
    (0.5 * freq_component + 0.5 * diversity_component).clamp(0.0, 1.0)
}

/// Match the phrase's tokens against the ordered category cue rules.
pub fn detect_category(tokens: &[String]) -> Option<ThemeCategory> {
    for (cues, category) in CATEGORY_RULES {
        let hit = tokens
            .iter()
            .any(|t| cues.iter().any(|cue| t.starts_with(cue)));
        if hit {
            return Some(*category);
        }
    }
    None
}

/// Majority cue polarity across the context windows where the phrase occurs.
///
/// Scans every document's token stream for the phrase's token subsequence and
/// inspects a window around each occurrence. No cues anywhere → `None`;
/// an exact tie → `Neutral`.
pub fn detect_sentiment(phrase_tokens: &[String], doc_tokens: &[Vec<String>]) -> Option<Sentiment> {
    if phrase_tokens.is_empty() {
        return None;
    }

    let mut positive = 0usize;
    let mut negative = 0usize;

    for tokens in doc_tokens {
        for start in occurrence_positions(phrase_tokens, tokens) {
            let window_start = start.saturating_sub(SENTIMENT_WINDOW);
            let window_end = (start + phrase_tokens.len() + SENTIMENT_WINDOW).min(tokens.len());
            for token in &tokens[window_start..window_end] {
                if POSITIVE_CUES.iter().any(|cue| token.starts_with(cue)) {
                    positive += 1;
                }
                if NEGATIVE_CUES.iter().any(|cue| token.starts_with(cue)) {
                    negative += 1;
                }
            }
        }
    }

    match (positive, negative) {
        (0, 0) => None,
        (p, n) if p > n => Some(Sentiment::Positive),
        (p, n) if n > p => Some(Sentiment::Negative),
        _ => Some(Sentiment::Neutral),
    }
}

/// Start indices of every occurrence of `needle` as a token subsequence.
fn occurrence_positions(needle: &[String], haystack: &[String]) -> Vec<usize> {
    if needle.len() > haystack.len() {
        return Vec::new();
    }
    (0..=haystack.len() - needle.len())
        .filter(|&i| haystack[i..i + needle.len()] == *needle)
        .collect()
}
