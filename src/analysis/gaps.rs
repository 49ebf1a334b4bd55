// Content gap detection — quantified coverage deficits against competitor
// usage percentages.
//
// A theme used by at least half the competitor field that the brand lacks is
// a missing topic; one used by 30-50% of the field is an opportunity. Below
// 30% nothing is reported — fringe topics aren't gaps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::whitespace::Priority;
use crate::themes::model::ExtractedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapType {
    Missing,
    Opportunity,
}

/// A coverage deficit relative to competitor usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentGap {
    pub id: Uuid,
    pub theme: String,
    /// Percentage of competitors using this theme
    pub source_usage_percent: f64,
    pub your_usage: bool,
    pub gap_type: GapType,
    pub recommendation: String,
    pub impact: Priority,
}

const MISSING_THRESHOLD: f64 = 50.0;
const OPPORTUNITY_THRESHOLD: f64 = 30.0;
const HIGH_IMPACT_THRESHOLD: f64 = 70.0;

/// Detect content gaps in the competitor theme set.
///
/// Sorted by impact, high first; ties by usage percentage descending then
/// theme text.
pub fn detect_gaps(
    competitor_themes: &[ExtractedTheme],
    your_themes: &[ExtractedTheme],
    total_competitor_count: usize,
) -> Vec<ContentGap> {
    let your_phrases: std::collections::HashSet<String> =
        your_themes.iter().map(|t| t.theme.to_lowercase()).collect();

    let mut gaps = Vec::new();

    for theme in competitor_themes {
        let usage = if total_competitor_count == 0 {
            0.0
        } else {
            theme.source_ids.len() as f64 / total_competitor_count as f64 * 100.0
        };
        let your_usage = your_phrases.contains(&theme.theme.to_lowercase());
        if your_usage {
            continue;
        }

        if usage >= MISSING_THRESHOLD {
            let impact = if usage >= HIGH_IMPACT_THRESHOLD {
                Priority::High
            } else {
                Priority::Medium
            };
            gaps.push(ContentGap {
                id: Uuid::new_v4(),
                theme: theme.theme.clone(),
                source_usage_percent: usage,
                your_usage,
                gap_type: GapType::Missing,
                recommendation: format!(
                    "{:.0}% of competitors cover \"{}\" — add content addressing it",
                    usage, theme.theme
                ),
                impact,
            });
        } else if usage >= OPPORTUNITY_THRESHOLD {
            gaps.push(ContentGap {
                id: Uuid::new_v4(),
                theme: theme.theme.clone(),
                source_usage_percent: usage,
                your_usage,
                gap_type: GapType::Opportunity,
                recommendation: format!(
                    "\"{}\" is gaining traction ({:.0}% of competitors) — worth a position",
                    theme.theme, usage
                ),
                impact: Priority::Low,
            });
        }
    }

    gaps.sort_by(|a, b| {
        b.impact
            .cmp(&a.impact)
            .then_with(|| {
                b.source_usage_percent
                    .partial_cmp(&a.source_usage_percent)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.theme.cmp(&b.theme))
    });

    gaps
}
