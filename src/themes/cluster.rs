// Theme clustering — union-find over a token-overlap relation.
//
// Two themes land in the same cluster when their token sets share enough
// vocabulary (Jaccard >= 0.5) or one phrase contains the other. Union-find
// makes the merge order independent of input ordering; a plain
// any-shared-token rule over-merges on common business words, hence the
// threshold.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::model::ExtractedTheme;

/// Minimum token-set Jaccard overlap for two themes to merge.
pub const JACCARD_THRESHOLD: f64 = 0.5;

/// A group of lexically related themes merged into one named topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeCluster {
    /// Phrase text of the highest-frequency member
    pub name: String,
    /// Members, highest frequency first
    pub themes: Vec<ExtractedTheme>,
    /// Sum of member frequencies
    pub total_frequency: u32,
    /// Percentage of candidate sources represented among member source ids,
    /// in [0,100]
    pub competitor_coverage: f64,
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Attach the later root under the earlier one so cluster
            // identity follows first encounter order
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

fn overlaps(a: &ExtractedTheme, b: &ExtractedTheme) -> bool {
    if a.theme.contains(&b.theme) || b.theme.contains(&a.theme) {
        return true;
    }
    let set_a: HashSet<&str> = a.keywords.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.keywords.iter().map(String::as_str).collect();
    let shared = set_a.intersection(&set_b).count();
    if shared == 0 {
        return false;
    }
    let combined = set_a.union(&set_b).count();
    shared as f64 / combined as f64 >= JACCARD_THRESHOLD
}

/// Group themes into named clusters by lexical overlap.
///
/// Clusters partition the input exactly: every theme belongs to one cluster.
/// `competitor_coverage` is the share of `total_candidate_sources` seen among
/// member source ids (0 when the candidate count is 0). Output is sorted by
/// total frequency descending, ties by name.
pub fn cluster(themes: &[ExtractedTheme], total_candidate_sources: usize) -> Vec<ThemeCluster> {
    if themes.is_empty() {
        return Vec::new();
    }

    let mut uf = UnionFind::new(themes.len());
    for i in 0..themes.len() {
        for j in (i + 1)..themes.len() {
            if overlaps(&themes[i], &themes[j]) {
                uf.union(i, j);
            }
        }
    }

    // Group member indices by root, preserving input order within groups
    let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..themes.len() {
        let root = uf.find(i);
        groups.entry(root).or_default().push(i);
    }

    let mut clusters: Vec<ThemeCluster> = groups
        .into_values()
        .map(|indices| {
            let mut members: Vec<ExtractedTheme> =
                indices.iter().map(|&i| themes[i].clone()).collect();
            // Stable sort keeps the earliest-encountered member first among
            // frequency ties, which also picks the cluster name
            members.sort_by(|a, b| b.frequency.cmp(&a.frequency));

            let total_frequency = members.iter().map(|t| t.frequency).sum();
            let covered: HashSet<&str> = members
                .iter()
                .flat_map(|t| t.source_ids.iter().map(String::as_str))
                .collect();
            let competitor_coverage = if total_candidate_sources == 0 {
                0.0
            } else {
                (covered.len() as f64 / total_candidate_sources as f64 * 100.0).clamp(0.0, 100.0)
            };

            ThemeCluster {
                name: members[0].theme.clone(),
                themes: members,
                total_frequency,
                competitor_coverage,
            }
        })
        .collect();

    clusters.sort_by(|a, b| {
        b.total_frequency
            .cmp(&a.total_frequency)
            .then_with(|| a.name.cmp(&b.name))
    });

    clusters
}
