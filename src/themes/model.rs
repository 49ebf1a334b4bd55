// Theme data model — the types that flow out of an extraction run.
//
// Everything here is a derived, immutable output of a single analysis
// invocation. Nothing persists between runs inside the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of message a theme carries, detected from lexical cues.
///
/// Absence of cues leaves the category unset — there is no default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    ValueProposition,
    Benefit,
    Problem,
    Proof,
}

/// Sentiment of the contexts a theme appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// A recurring word or short phrase extracted from a document corpus,
/// with its frequency, attribution, and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedTheme {
    pub id: Uuid,
    /// The lowercased, normalized phrase
    pub theme: String,
    /// How many times the phrase occurred across the whole corpus
    pub frequency: u32,
    /// Distinct sources (brand or competitor ids) that produced the phrase
    pub source_ids: HashSet<String>,
    /// Confidence in [0,1] — increases with frequency and source diversity
    pub confidence: f64,
    /// The phrase's constituent tokens, in order
    pub keywords: Vec<String>,
    pub category: Option<ThemeCategory>,
    pub sentiment: Option<Sentiment>,
}

impl ExtractedTheme {
    /// Source diversity — how many distinct entities used this phrase.
    pub fn source_count(&self) -> usize {
        self.source_ids.len()
    }
}
