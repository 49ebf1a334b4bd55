// Content provider trait — the swap-ready acquisition seam.
//
// Real providers (site crawlers, scraping services) are async and fallible;
// the trait reflects that. The engine only ever sees the resulting document
// collection, so a caller can substitute a degraded or cached set when a
// provider fails.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::Document;

/// Trait for fetching the document set attributed to one entity.
///
/// Implementations must be async because most providers perform network
/// I/O. The locator's meaning is implementation-defined (a URL for a
/// crawler, a path for the file provider).
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<Document>>;
}

/// File-backed provider — reads a JSON array of documents from disk.
///
/// This is the default for the CLI: content is scraped (or hand-assembled)
/// out of band and handed to the engine as plain JSON.
pub struct JsonFileProvider;

#[async_trait]
impl ContentProvider for JsonFileProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<Document>> {
        let raw = tokio::fs::read_to_string(locator)
            .await
            .with_context(|| format!("failed to read document file {locator}"))?;
        parse_documents(&raw)
    }
}

/// Parse a JSON array of documents.
///
/// Separated from the file read so parsing is testable without disk access.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>> {
    serde_json::from_str(raw).context("document file is not a JSON array of documents")
}
