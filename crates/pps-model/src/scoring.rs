//! Scoring rule configuration.

use serde::{Deserialize, Serialize};

/// Default specificity markers ("concrete", "in detail", "example", "for example").
pub const DEFAULT_SPECIFICITY_MARKERS: [&str; 4] = ["구체적", "자세히", "예시", "예를 들어"];

/// Tunable constants of the feedback heuristic.
///
/// Deserialized from the `[scoring]` table of a content catalog. Every field
/// is optional in the file and falls back to the reference values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Drafts strictly longer than this many characters earn the detail bonus.
    pub detail_threshold_chars: usize,
    /// Points for a sufficiently detailed draft.
    pub detail_points: u32,
    /// Points per satisfied requirement.
    pub requirement_points: u32,
    /// Points when any specificity marker is present.
    pub specificity_points: u32,
    /// Phrases that signal concrete detail.
    pub specificity_markers: Vec<String>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            detail_threshold_chars: 100,
            detail_points: 20,
            requirement_points: 15,
            specificity_points: 10,
            specificity_markers: DEFAULT_SPECIFICITY_MARKERS
                .iter()
                .map(|marker| (*marker).to_string())
                .collect(),
        }
    }
}

impl ScoringRules {
    /// Highest score reachable on a step with `requirement_count` requirements.
    pub fn max_score(&self, requirement_count: usize) -> u32 {
        let requirements = u32::try_from(requirement_count).unwrap_or(u32::MAX);
        self.detail_points
            .saturating_add(self.requirement_points.saturating_mul(requirements))
            .saturating_add(self.specificity_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = ScoringRules::default();
        assert_eq!(rules.detail_threshold_chars, 100);
        assert_eq!(rules.specificity_markers.len(), 4);
        assert!(rules.specificity_markers.iter().any(|m| m == "예를 들어"));
    }

    #[test]
    fn test_max_score_for_reference_steps() {
        let rules = ScoringRules::default();
        assert_eq!(rules.max_score(5), 105);
        assert_eq!(rules.max_score(0), 30);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let rules: ScoringRules = toml::from_str("requirement_points = 10").unwrap();
        assert_eq!(rules.requirement_points, 10);
        assert_eq!(rules.detail_points, 20);
        assert_eq!(rules.specificity_markers.len(), 4);
    }
}
