// Set comparison — unique and common theme subsets, case-insensitive.
//
// Both functions are pure and preserve the order of their first argument.
// The comparison side is folded into a hash set of lowercased phrases, so
// the work is O(n + m) rather than pairwise.

use std::collections::HashSet;

use super::model::ExtractedTheme;

fn phrase_set(themes: &[ExtractedTheme]) -> HashSet<String> {
    themes.iter().map(|t| t.theme.to_lowercase()).collect()
}

/// Themes of `target` whose phrase text matches nothing in `comparison`.
pub fn find_unique(target: &[ExtractedTheme], comparison: &[ExtractedTheme]) -> Vec<ExtractedTheme> {
    let comparison_phrases = phrase_set(comparison);
    target
        .iter()
        .filter(|t| !comparison_phrases.contains(&t.theme.to_lowercase()))
        .cloned()
        .collect()
}

/// Themes of `a` whose phrase text matches some theme in `b`.
pub fn find_common(a: &[ExtractedTheme], b: &[ExtractedTheme]) -> Vec<ExtractedTheme> {
    let b_phrases = phrase_set(b);
    a.iter()
        .filter(|t| b_phrases.contains(&t.theme.to_lowercase()))
        .cloned()
        .collect()
}
