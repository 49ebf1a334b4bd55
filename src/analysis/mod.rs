// Competitive analysis orchestration — the single entry point that runs the
// whole pipeline over two document corpora and assembles the report.
//
// Pure and synchronous: tokenize, extract, score, cluster, compare, then
// derive white space, gaps, and the differentiation score. Configuration is
// validated up front; degenerate input (empty corpora, all-stop-word text)
// produces an empty-shaped report, never an error.

pub mod differentiation;
pub mod gaps;
pub mod whitespace;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{AnalysisConfig, ConfigError};
use crate::content::Document;
use crate::text::Tokenizer;
use crate::themes::cluster::{cluster, ThemeCluster};
use crate::themes::compare::{find_common, find_unique};
use crate::themes::extract::PhraseExtractor;
use crate::themes::model::ExtractedTheme;
use crate::themes::score::score_themes;

use self::differentiation::{score_differentiation, DifferentiationScore};
use self::gaps::{detect_gaps, ContentGap};
use self::whitespace::{detect_white_space, WhiteSpaceOpportunity};

/// Headline numbers for the top of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Distinct sources across both corpora
    pub total_sources: usize,
    /// Documents analyzed across both corpora
    pub total_documents: usize,
    /// Competitor themes per competitor source
    pub avg_themes_per_source: f64,
    /// Share of your themes not used by any competitor
    pub unique_theme_percent: f64,
    /// Areas of the highest-scored white-space opportunities
    pub top_opportunity_areas: Vec<String>,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitiveAnalysisReport {
    pub your_themes: Vec<ExtractedTheme>,
    pub competitor_themes: Vec<ExtractedTheme>,
    /// Your themes that competitors also use
    pub common_themes: Vec<ExtractedTheme>,
    /// Your themes no competitor uses
    pub unique_themes: Vec<ExtractedTheme>,
    /// Competitor themes grouped into named topics
    pub clusters: Vec<ThemeCluster>,
    pub white_space: Vec<WhiteSpaceOpportunity>,
    pub content_gaps: Vec<ContentGap>,
    pub differentiation: DifferentiationScore,
    pub summary: ReportSummary,
    pub generated_at: DateTime<Utc>,
}

const TOP_OPPORTUNITY_COUNT: usize = 3;

/// Run the full competitive analysis pipeline.
///
/// `competitor_count` is the number of competitor entities under analysis —
/// it normalizes cluster coverage and gap usage percentages. The only error
/// is invalid configuration, raised before any processing.
pub fn analyze(
    your_documents: &[Document],
    competitor_documents: &[Document],
    competitor_count: usize,
    config: &AnalysisConfig,
) -> Result<CompetitiveAnalysisReport, ConfigError> {
    config.validate()?;

    if your_documents.is_empty() {
        warn!("No brand documents supplied — report will be empty-shaped");
    }
    if competitor_documents.is_empty() {
        warn!("No competitor documents supplied — comparisons will be empty");
    }

    let tokenizer = Tokenizer::new();
    let extractor = PhraseExtractor {
        min_frequency: config.min_theme_frequency,
        max_themes: config.max_themes,
    };

    let your_stats = extractor.extract(&tokenizer, your_documents);
    let your_themes = score_themes(your_stats, &tokenizer, your_documents);

    let competitor_stats = extractor.extract(&tokenizer, competitor_documents);
    let competitor_themes = score_themes(competitor_stats, &tokenizer, competitor_documents);

    let unique_themes = find_unique(&your_themes, &competitor_themes);
    let common_themes = find_common(&your_themes, &competitor_themes);

    let clusters = cluster(&competitor_themes, competitor_count);
    let white_space = detect_white_space(&competitor_themes, &your_themes);
    let content_gaps = detect_gaps(&competitor_themes, &your_themes, competitor_count);
    let differentiation =
        score_differentiation(&your_themes, &unique_themes, &common_themes, your_documents);

    let summary = summarize(
        your_documents,
        competitor_documents,
        competitor_count,
        &your_themes,
        &competitor_themes,
        &unique_themes,
        &white_space,
    );

    info!(
        your_themes = your_themes.len(),
        competitor_themes = competitor_themes.len(),
        unique = unique_themes.len(),
        clusters = clusters.len(),
        white_space = white_space.len(),
        gaps = content_gaps.len(),
        overall = differentiation.overall,
        "Analysis complete"
    );

    Ok(CompetitiveAnalysisReport {
        your_themes,
        competitor_themes,
        common_themes,
        unique_themes,
        clusters,
        white_space,
        content_gaps,
        differentiation,
        summary,
        generated_at: Utc::now(),
    })
}

#[allow(clippy::too_many_arguments)]
fn summarize(
    your_documents: &[Document],
    competitor_documents: &[Document],
    competitor_count: usize,
    your_themes: &[ExtractedTheme],
    competitor_themes: &[ExtractedTheme],
    unique_themes: &[ExtractedTheme],
    white_space: &[WhiteSpaceOpportunity],
) -> ReportSummary {
    let sources: HashSet<&str> = your_documents
        .iter()
        .chain(competitor_documents)
        .map(|d| d.source_id.as_str())
        .collect();

    let avg_themes_per_source = if competitor_count == 0 {
        0.0
    } else {
        competitor_themes.len() as f64 / competitor_count as f64
    };

    let unique_theme_percent = if your_themes.is_empty() {
        0.0
    } else {
        unique_themes.len() as f64 / your_themes.len() as f64 * 100.0
    };

    ReportSummary {
        total_sources: sources.len(),
        total_documents: your_documents.len() + competitor_documents.len(),
        avg_themes_per_source,
        unique_theme_percent,
        top_opportunity_areas: white_space
            .iter()
            .take(TOP_OPPORTUNITY_COUNT)
            .map(|o| o.area.clone())
            .collect(),
    }
}
