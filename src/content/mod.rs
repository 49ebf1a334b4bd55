// Content acquisition boundary — document model and the provider seam.
//
// The engine itself never performs I/O: it accepts already-fetched document
// collections. The ContentProvider trait is where a scraping or crawling
// collaborator plugs in; the bundled implementation reads JSON files so the
// CLI and the test suite never touch the network.

pub mod provider;

use serde::{Deserialize, Serialize};

/// Where in a site's structure a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Landing,
    About,
    Product,
    Service,
    Blog,
    Other,
}

/// A single free-text document attributed to a brand or competitor.
///
/// Owned by the caller; the engine reads it and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the originating entity (the brand or a competitor)
    pub source_id: String,
    /// Human-readable name of that entity
    pub source_name: String,
    /// The document body — may contain leftover markup, which the
    /// tokenizer strips
    pub text: String,
    pub document_type: DocumentType,
}

impl Document {
    /// Convenience constructor used widely in tests and examples.
    pub fn new(source_id: &str, source_name: &str, text: &str, document_type: DocumentType) -> Self {
        Self {
            source_id: source_id.to_string(),
            source_name: source_name.to_string(),
            text: text.to_string(),
            document_type,
        }
    }
}
