// End-to-end tests for the analyze() entry point — the full pipeline from
// raw documents to the assembled report.

use spyglass::analysis::analyze;
use spyglass::config::{AnalysisConfig, ConfigError};
use spyglass::content::{Document, DocumentType};

fn doc(source: &str, text: &str, document_type: DocumentType) -> Document {
    Document::new(source, source, text, document_type)
}

fn your_documents() -> Vec<Document> {
    vec![
        doc(
            "brand",
            "Our proprietary workflow engine saves teams hours every week. \
             Proven results from thousands of customers.",
            DocumentType::Landing,
        ),
        doc(
            "brand",
            "Workflow engine pricing that scales with usage. \
             The workflow engine integrates with your existing stack.",
            DocumentType::Product,
        ),
        doc(
            "brand",
            "Why we built an excellent workflow engine for operations teams.",
            DocumentType::Blog,
        ),
    ]
}

fn competitor_documents() -> Vec<Document> {
    vec![
        doc(
            "compA",
            "Digital transformation drives innovation. Digital transformation \
             playbooks for enterprise teams.",
            DocumentType::Landing,
        ),
        doc(
            "compB",
            "Digital transformation improves efficiency. Digital transformation \
             reduces overhead across departments.",
            DocumentType::Landing,
        ),
        doc(
            "compC",
            "Digital transformation enables growth. Enterprise security \
             compliance built in.",
            DocumentType::Product,
        ),
        doc(
            "compA",
            "Enterprise security compliance for regulated industries.",
            DocumentType::Service,
        ),
    ]
}

// ============================================================
// Configuration errors — surfaced before any processing
// ============================================================

#[test]
fn zero_max_themes_is_a_config_error() {
    let config = AnalysisConfig {
        min_theme_frequency: 2,
        max_themes: 0,
    };
    let result = analyze(&your_documents(), &competitor_documents(), 3, &config);
    assert_eq!(result.unwrap_err(), ConfigError::MaxThemes(0));
}

#[test]
fn zero_min_frequency_is_a_config_error() {
    let config = AnalysisConfig {
        min_theme_frequency: 0,
        max_themes: 50,
    };
    let result = analyze(&[], &[], 0, &config);
    assert_eq!(result.unwrap_err(), ConfigError::MinFrequency(0));
}

// ============================================================
// Degenerate input — empty-shaped report, never a panic
// ============================================================

#[test]
fn empty_corpora_produce_an_empty_shaped_report() {
    let config = AnalysisConfig::default();
    let report = analyze(&[], &[], 0, &config).expect("empty input is not an error");

    assert!(report.your_themes.is_empty());
    assert!(report.competitor_themes.is_empty());
    assert!(report.common_themes.is_empty());
    assert!(report.unique_themes.is_empty());
    assert!(report.clusters.is_empty());
    assert!(report.white_space.is_empty());
    assert!(report.content_gaps.is_empty());
    assert_eq!(report.differentiation.overall, 0);
    assert_eq!(report.summary.total_documents, 0);
    assert_eq!(report.summary.total_sources, 0);
    assert_eq!(report.summary.unique_theme_percent, 0.0);
}

#[test]
fn all_stop_word_documents_degrade_to_empty_themes() {
    let config = AnalysisConfig::default();
    let docs = vec![doc("x", "the and or but is a an", DocumentType::Other)];
    let report = analyze(&docs, &[], 1, &config).unwrap();
    assert!(report.your_themes.is_empty());
    assert_eq!(report.summary.total_documents, 1);
}

#[test]
fn markup_heavy_text_never_errors() {
    let config = AnalysisConfig {
        min_theme_frequency: 1,
        max_themes: 50,
    };
    let docs = vec![doc(
        "x",
        "<html><body><h1>Growth</h1><script>var x = 1;</script></body></html>",
        DocumentType::Landing,
    )];
    let report = analyze(&docs, &[], 1, &config).unwrap();
    assert!(report
        .your_themes
        .iter()
        .all(|t| !t.theme.contains('<') && !t.theme.contains('>')));
}

// ============================================================
// Full pipeline
// ============================================================

#[test]
fn full_report_is_internally_consistent() {
    let config = AnalysisConfig {
        min_theme_frequency: 2,
        max_themes: 50,
    };
    let report = analyze(&your_documents(), &competitor_documents(), 3, &config).unwrap();

    // Themes respect config limits on both sides
    for theme in report.your_themes.iter().chain(&report.competitor_themes) {
        assert!(theme.frequency >= 2);
        assert!((0.0..=1.0).contains(&theme.confidence));
        assert!(!theme.source_ids.is_empty());
    }
    assert!(report.your_themes.len() <= 50);
    assert!(report.competitor_themes.len() <= 50);

    // Unique + common partition your themes
    assert_eq!(
        report.unique_themes.len() + report.common_themes.len(),
        report.your_themes.len()
    );

    // Clusters partition competitor themes
    let clustered: usize = report.clusters.iter().map(|c| c.themes.len()).sum();
    assert_eq!(clustered, report.competitor_themes.len());

    // Cluster ordering
    for window in report.clusters.windows(2) {
        assert!(window[0].total_frequency >= window[1].total_frequency);
    }

    // Score bounded
    assert!(report.differentiation.overall <= 100);

    // Summary matches the corpora: brand + 3 competitors
    assert_eq!(report.summary.total_sources, 4);
    assert_eq!(report.summary.total_documents, 7);
}

#[test]
fn competitor_dominant_theme_shows_up_as_white_space_and_gap() {
    let config = AnalysisConfig {
        min_theme_frequency: 2,
        max_themes: 50,
    };
    let report = analyze(&your_documents(), &competitor_documents(), 3, &config).unwrap();

    // "digital transformation" appears 5 times across all 3 competitors
    // and never in the brand corpus
    let opportunity = report
        .white_space
        .iter()
        .find(|o| o.area == "digital transformation")
        .expect("dominant competitor theme must be white space");
    assert!((opportunity.opportunity_score - 75.0).abs() < 1e-9);
    assert!(!opportunity.your_coverage);

    // All 3 competitors use it -> 100% usage -> high-impact missing gap
    let gap = report
        .content_gaps
        .iter()
        .find(|g| g.theme == "digital transformation")
        .expect("dominant competitor theme must be a gap");
    assert!((gap.source_usage_percent - 100.0).abs() < 1e-9);

    // The strongest white space surfaces in the summary's top areas
    assert!(report
        .summary
        .top_opportunity_areas
        .contains(&"digital transformation".to_string()));
}

#[test]
fn your_unique_themes_are_absent_from_competitor_corpus() {
    let config = AnalysisConfig {
        min_theme_frequency: 2,
        max_themes: 50,
    };
    let report = analyze(&your_documents(), &competitor_documents(), 3, &config).unwrap();

    let competitor_phrases: std::collections::HashSet<String> = report
        .competitor_themes
        .iter()
        .map(|t| t.theme.to_lowercase())
        .collect();

    assert!(!report.unique_themes.is_empty());
    for theme in &report.unique_themes {
        assert!(
            !competitor_phrases.contains(&theme.theme.to_lowercase()),
            "'{}' claimed unique but appears in competitor themes",
            theme.theme
        );
    }
    assert!(report
        .unique_themes
        .iter()
        .any(|t| t.theme == "workflow engine"));
}

#[test]
fn report_serializes_to_json() {
    let config = AnalysisConfig::default();
    let report = analyze(&your_documents(), &competitor_documents(), 3, &config).unwrap();
    let json = serde_json::to_string(&report).expect("report must serialize");
    assert!(json.contains("\"differentiation\""));
    assert!(json.contains("\"generated_at\""));
}
