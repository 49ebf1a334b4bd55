// Phrase extraction — n-gram candidates with corpus-wide frequency counts
// and source attribution.
//
// Each document is tokenized, then unigrams, bigrams, and trigrams over the
// filtered token stream become candidate phrases. A per-call accumulator maps
// each phrase to its frequency and the set of sources that produced it —
// there is no shared state between runs, so independent analyses can run
// concurrently.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::content::Document;
use crate::text::Tokenizer;

/// Raw frequency and attribution data for one candidate phrase.
///
/// Unscored — confidence, category, and sentiment are assigned downstream
/// by the theme scorer.
#[derive(Debug, Clone)]
pub struct PhraseStats {
    pub phrase: String,
    pub frequency: u32,
    pub source_ids: HashSet<String>,
    /// The phrase's constituent tokens, in order
    pub tokens: Vec<String>,
}

/// Mines candidate phrases from a document corpus.
pub struct PhraseExtractor {
    /// Phrases occurring fewer times than this are dropped
    pub min_frequency: u32,
    /// Cap on surviving phrases, ranked by frequency
    pub max_themes: usize,
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_themes: 50,
        }
    }
}

impl PhraseExtractor {
    /// Extract candidate phrases from the corpus.
    ///
    /// Empty input yields an empty vec; a document that is all stop words
    /// contributes nothing. Output is ranked by frequency descending, ties
    /// broken by phrase length descending then lexicographically — a total
    /// order, so results don't depend on map iteration order.
    pub fn extract(&self, tokenizer: &Tokenizer, documents: &[Document]) -> Vec<PhraseStats> {
        let mut accumulator: HashMap<String, PhraseStats> = HashMap::new();

        for doc in documents {
            let tokens = tokenizer.tokenize_raw(&doc.text);
            // Stop words are already gone, so every window is a clean phrase
            for n in 1..=3 {
                for window in tokens.windows(n) {
                    let phrase = window.join(" ");
                    let entry = accumulator
                        .entry(phrase.clone())
                        .or_insert_with(|| PhraseStats {
                            phrase,
                            frequency: 0,
                            source_ids: HashSet::new(),
                            tokens: window.to_vec(),
                        });
                    entry.frequency += 1;
                    entry.source_ids.insert(doc.source_id.clone());
                }
            }
        }

        let candidate_count = accumulator.len();

        let mut surviving: Vec<PhraseStats> = accumulator
            .into_values()
            .filter(|s| s.frequency >= self.min_frequency)
            .collect();

        surviving.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then(b.phrase.len().cmp(&a.phrase.len()))
                .then(a.phrase.cmp(&b.phrase))
        });
        surviving.truncate(self.max_themes);

        debug!(
            documents = documents.len(),
            candidates = candidate_count,
            surviving = surviving.len(),
            min_frequency = self.min_frequency,
            "Extracted candidate phrases"
        );

        surviving
    }
}
