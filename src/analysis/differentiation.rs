// Differentiation scoring — the composite 0-100 metric summarizing how
// distinct the brand's messaging is from its competitors'.
//
// Five weighted components: unique-theme ratio (30%), messaging clarity
// (20%), value proposition strength (20%), content breadth (15%), and brand
// voice consistency (15%). Strengths, weaknesses, and opportunities come
// from fixed threshold rules over the same components.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::content::Document;
use crate::themes::model::{ExtractedTheme, Sentiment, ThemeCategory};

/// Per-component scores, each 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub unique_themes: u32,
    pub messaging_clarity: u32,
    pub value_proposition: u32,
    pub content_quality: u32,
    pub brand_voice: u32,
}

/// The composite differentiation verdict for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentiationScore {
    /// Weighted composite, 0-100
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
}

const WEIGHT_UNIQUE: f64 = 0.30;
const WEIGHT_CLARITY: f64 = 0.20;
const WEIGHT_VALUE_PROP: f64 = 0.20;
const WEIGHT_CONTENT: f64 = 0.15;
const WEIGHT_VOICE: f64 = 0.15;

/// Compute the differentiation score.
///
/// `unique_themes` and `common_themes` are the comparator's partition of
/// `your_themes` against the competitor set. Every component degrades to 0
/// on empty input; the overall score is always in [0,100].
pub fn score_differentiation(
    your_themes: &[ExtractedTheme],
    unique_themes: &[ExtractedTheme],
    common_themes: &[ExtractedTheme],
    your_documents: &[Document],
) -> DifferentiationScore {
    let total = your_themes.len();

    let unique_score = ratio_percent(unique_themes.len(), total);

    let categorized = your_themes.iter().filter(|t| t.category.is_some()).count();
    let clarity_score = ratio_percent(categorized, total);

    let value_count = your_themes
        .iter()
        .filter(|t| {
            matches!(
                t.category,
                Some(ThemeCategory::ValueProposition) | Some(ThemeCategory::Benefit)
            )
        })
        .count();
    let value_prop_score = (value_count as f64 * 20.0).min(100.0);

    let distinct_types: HashSet<_> = your_documents.iter().map(|d| d.document_type).collect();
    let content_score = (distinct_types.len() as f64 * 20.0).min(100.0);

    let voice_score = brand_voice_score(your_themes);

    let overall = (WEIGHT_UNIQUE * unique_score
        + WEIGHT_CLARITY * clarity_score
        + WEIGHT_VALUE_PROP * value_prop_score
        + WEIGHT_CONTENT * content_score
        + WEIGHT_VOICE * voice_score)
        .round() as u32;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut opportunities = Vec::new();

    if unique_score >= 50.0 {
        strengths.push(format!(
            "{:.0}% of your themes are unique to you",
            unique_score
        ));
    } else {
        weaknesses.push(format!(
            "Only {:.0}% of your themes are unique — most overlap with competitors",
            unique_score
        ));
    }

    if value_prop_score >= 60.0 {
        strengths.push("Clear value proposition and benefit messaging".to_string());
    } else {
        opportunities.push(
            "Sharpen value proposition and benefit language in your messaging".to_string(),
        );
    }

    if content_score >= 60.0 {
        strengths.push("Broad content coverage across page types".to_string());
    } else {
        opportunities
            .push("Expand content beyond the current mix of page types".to_string());
    }

    if !common_themes.is_empty() {
        weaknesses.push(format!(
            "{} of your themes are shared with competitors",
            common_themes.len()
        ));
    }

    DifferentiationScore {
        overall,
        breakdown: ScoreBreakdown {
            unique_themes: unique_score.round() as u32,
            messaging_clarity: clarity_score.round() as u32,
            value_proposition: value_prop_score.round() as u32,
            content_quality: content_score.round() as u32,
            brand_voice: voice_score.round() as u32,
        },
        strengths,
        weaknesses,
        opportunities,
    }
}

fn ratio_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Share of themes matching the majority sentiment.
///
/// The majority is taken over themes that carry a sentiment at all; when
/// none do there is no voice to measure and the component is 0.
fn brand_voice_score(your_themes: &[ExtractedTheme]) -> f64 {
    let mut counts: HashMap<Sentiment, usize> = HashMap::new();
    for theme in your_themes {
        if let Some(sentiment) = theme.sentiment {
            *counts.entry(sentiment).or_insert(0) += 1;
        }
    }
    // Tie-break by fixed polarity order so the result doesn't depend on
    // map iteration order
    let rank = |s: Sentiment| match s {
        Sentiment::Positive => 2,
        Sentiment::Neutral => 1,
        Sentiment::Negative => 0,
    };
    let majority = counts
        .into_iter()
        .max_by_key(|&(sentiment, count)| (count, rank(sentiment)))
        .map(|(sentiment, _)| sentiment);

    match majority {
        Some(sentiment) => {
            let matching = your_themes
                .iter()
                .filter(|t| t.sentiment == Some(sentiment))
                .count();
            ratio_percent(matching, your_themes.len())
        }
        None => 0.0,
    }
}
