// White-space detection — topics competitors cover that the brand does not.
//
// Two rules produce opportunities:
//   (a) a competitor theme with frequency >= 3 that is absent from the
//       brand's themes — score scales with frequency, capped at 100
//   (b) a theme used by exactly one competitor — a niche a second entrant
//       could take, flat score 60, regardless of the brand's coverage
// A theme flagged by (a) is not emitted again by (b).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::themes::model::ExtractedTheme;

/// Opportunity priority / gap impact level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A topic competitors message around that the brand currently does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhiteSpaceOpportunity {
    pub id: Uuid,
    /// The theme phrase defining the opportunity area
    pub area: String,
    pub description: String,
    /// Competitor sources already occupying the area
    pub source_gap: HashSet<String>,
    /// Whether the brand's own themes already cover the area
    pub your_coverage: bool,
    /// 0-100, higher means more attractive
    pub opportunity_score: f64,
    pub priority: Priority,
    pub suggested_angle: String,
    pub keywords: Vec<String>,
}

const STRONG_THEME_MIN_FREQUENCY: u32 = 3;
const FREQUENCY_SCORE_FACTOR: f64 = 15.0;
const SINGLE_COMPETITOR_SCORE: f64 = 60.0;

fn priority_for(score: f64) -> Priority {
    if score >= 70.0 {
        Priority::High
    } else if score >= 40.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Detect white-space opportunities in the competitor theme set.
///
/// Sorted by opportunity score descending, ties by area for determinism.
pub fn detect_white_space(
    competitor_themes: &[ExtractedTheme],
    your_themes: &[ExtractedTheme],
) -> Vec<WhiteSpaceOpportunity> {
    let your_phrases: HashSet<String> =
        your_themes.iter().map(|t| t.theme.to_lowercase()).collect();

    let mut opportunities = Vec::new();
    let mut flagged: HashSet<&str> = HashSet::new();

    // Rule (a): strong competitor themes the brand doesn't touch
    for theme in competitor_themes {
        let covered = your_phrases.contains(&theme.theme.to_lowercase());
        if theme.frequency >= STRONG_THEME_MIN_FREQUENCY && !covered {
            let score = (f64::from(theme.frequency) * FREQUENCY_SCORE_FACTOR).min(100.0);
            flagged.insert(theme.theme.as_str());
            opportunities.push(WhiteSpaceOpportunity {
                id: Uuid::new_v4(),
                area: theme.theme.clone(),
                description: format!(
                    "Competitors message around \"{}\" ({} mentions across {} sources) while you don't",
                    theme.theme,
                    theme.frequency,
                    theme.source_ids.len()
                ),
                source_gap: theme.source_ids.clone(),
                your_coverage: false,
                opportunity_score: score,
                priority: priority_for(score),
                suggested_angle: format!(
                    "Claim \"{}\" with content grounded in your own positioning",
                    theme.theme
                ),
                keywords: theme.keywords.clone(),
            });
        }
    }

    // Rule (b): themes only one competitor uses — an uncontested niche
    for theme in competitor_themes {
        let single_competitor = theme.frequency == 1 || theme.source_ids.len() == 1;
        if single_competitor && !flagged.contains(theme.theme.as_str()) {
            let covered = your_phrases.contains(&theme.theme.to_lowercase());
            opportunities.push(WhiteSpaceOpportunity {
                id: Uuid::new_v4(),
                area: theme.theme.clone(),
                description: format!(
                    "Only one competitor currently messages around \"{}\"",
                    theme.theme
                ),
                source_gap: theme.source_ids.clone(),
                your_coverage: covered,
                opportunity_score: SINGLE_COMPETITOR_SCORE,
                priority: Priority::Medium,
                suggested_angle: format!(
                    "Outflank the sole competitor on \"{}\" before the space gets crowded",
                    theme.theme
                ),
                keywords: theme.keywords.clone(),
            });
        }
    }

    opportunities.sort_by(|a, b| {
        b.opportunity_score
            .partial_cmp(&a.opportunity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.area.cmp(&b.area))
    });

    opportunities
}
