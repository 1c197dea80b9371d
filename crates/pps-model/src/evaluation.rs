//! Evaluation result produced for a submitted draft.

use serde::{Deserialize, Serialize};

/// Structured feedback for one submission.
///
/// Created fresh on every submission and replaced wholesale by the next one.
/// `score` has no upper bound: a step with many satisfied requirements can
/// score above 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Accumulated score.
    pub score: u32,
    /// What the draft did well, in check order.
    pub strengths: Vec<String>,
    /// What the draft is missing, in check order.
    pub weaknesses: Vec<String>,
    /// Concrete improvement hints, in check order.
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    /// Score label as displayed next to the nominal maximum, e.g. `"75/100"`.
    pub fn score_label(&self) -> String {
        format!("{}/100", self.score)
    }

    /// Whether the score went above the nominal 100 points.
    pub fn exceeds_nominal_max(&self) -> bool {
        self.score > 100
    }

    /// True when there is nothing at all to report.
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.weaknesses.is_empty() && self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        let result = EvaluationResult {
            score: 75,
            ..Default::default()
        };
        assert_eq!(result.score_label(), "75/100");
        assert!(!result.exceeds_nominal_max());
    }

    #[test]
    fn test_score_above_hundred_is_reported_as_is() {
        let result = EvaluationResult {
            score: 130,
            ..Default::default()
        };
        assert_eq!(result.score_label(), "130/100");
        assert!(result.exceeds_nominal_max());
    }

    #[test]
    fn test_json_shape() {
        let result = EvaluationResult {
            score: 20,
            strengths: vec!["충분한 설명 제공".to_string()],
            weaknesses: vec![],
            suggestions: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 20);
        assert_eq!(json["strengths"][0], "충분한 설명 제공");
        assert!(json["weaknesses"].as_array().unwrap().is_empty());
    }
}
