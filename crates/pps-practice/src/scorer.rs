//! Keyword heuristic scorer.
//!
//! Scoring runs three checks in a fixed order over the case-folded draft:
//!
//! 1. **Detail**: character count above the threshold
//! 2. **Requirements**: for each requirement, any of its whitespace-separated
//!    words occurring as a substring
//! 3. **Specificity**: any marker phrase occurring as a substring
//!
//! Substring matching is intentional: "타겟" matches inside "타겟으로".
//! The total is never clamped, so steps with many requirements can score
//! above 100.

use pps_model::{EvaluationResult, ScoringRules};
use tracing::debug;

use crate::feedback::Finding;

/// Scores drafts against requirement phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackScorer {
    rules: ScoringRules,
}

impl FeedbackScorer {
    /// Create a scorer with the given rules.
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// The rules this scorer applies.
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Run every check and return the findings in append order.
    pub fn analyze<S: AsRef<str>>(&self, input: &str, requirements: &[S]) -> Vec<Finding> {
        let folded = input.to_lowercase();
        let mut findings = Vec::with_capacity(requirements.len() + 2);

        findings.push(self.check_detail(input));
        for requirement in requirements {
            findings.push(check_requirement(&folded, requirement.as_ref()));
        }
        findings.push(self.check_specificity(&folded));

        findings
    }

    /// Evaluate a draft against the given requirement phrases.
    pub fn evaluate<S: AsRef<str>>(&self, input: &str, requirements: &[S]) -> EvaluationResult {
        let findings = self.analyze(input, requirements);
        let result = self.summarize(&findings);
        debug!(
            chars = input.chars().count(),
            requirements = requirements.len(),
            satisfied = findings
                .iter()
                .filter(|f| matches!(f, Finding::RequirementMet { .. }))
                .count(),
            score = result.score,
            "draft evaluated"
        );
        result
    }

    /// Fold findings into an evaluation result.
    pub fn summarize(&self, findings: &[Finding]) -> EvaluationResult {
        let mut result = EvaluationResult::default();
        for finding in findings {
            result.score = result.score.saturating_add(finding.points(&self.rules));
            result.strengths.extend(finding.strength());
            result.weaknesses.extend(finding.weakness());
            result.suggestions.extend(finding.suggestion());
        }
        result
    }

    fn check_detail(&self, input: &str) -> Finding {
        if input.chars().count() > self.rules.detail_threshold_chars {
            Finding::DetailSufficient
        } else {
            Finding::DetailInsufficient
        }
    }

    fn check_specificity(&self, folded: &str) -> Finding {
        let present = self
            .rules
            .specificity_markers
            .iter()
            .any(|marker| folded.contains(marker.to_lowercase().as_str()));
        if present {
            Finding::SpecificityPresent
        } else {
            Finding::SpecificityMissing
        }
    }
}

fn check_requirement(folded: &str, requirement: &str) -> Finding {
    let met = requirement
        .to_lowercase()
        .split_whitespace()
        .any(|word| folded.contains(word));
    if met {
        Finding::RequirementMet {
            requirement: requirement.to_string(),
        }
    } else {
        Finding::RequirementMissing {
            requirement: requirement.to_string(),
        }
    }
}

/// Evaluate with the default rules.
pub fn evaluate<S: AsRef<str>>(input: &str, requirements: &[S]) -> EvaluationResult {
    FeedbackScorer::default().evaluate(input, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_not_whole_word() {
        let findings = FeedbackScorer::default().analyze("타겟으로 하는 글", &["타겟 독자층 명시"]);
        assert_eq!(
            findings[1],
            Finding::RequirementMet {
                requirement: "타겟 독자층 명시".to_string()
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        let result = evaluate("seo를 고려해주세요", &["SEO 최적화 요소 포함"]);
        assert_eq!(result.score, 15);
        assert_eq!(result.strengths, vec!["SEO 최적화 요소 포함 요구사항 충족"]);
    }

    #[test]
    fn test_custom_rules() {
        let scorer = FeedbackScorer::new(ScoringRules {
            detail_threshold_chars: 3,
            detail_points: 1,
            requirement_points: 2,
            specificity_points: 4,
            specificity_markers: vec!["EXAMPLE".to_string()],
        });
        let result = scorer.evaluate("an example of topic", &["topic"]);
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_threshold_is_strict() {
        let exactly = "가".repeat(100);
        let result = evaluate(&exactly, &[] as &[&str]);
        assert_eq!(result.weaknesses, vec!["설명이 부족함"]);

        let over = "가".repeat(101);
        let result = evaluate(&over, &[] as &[&str]);
        assert_eq!(result.strengths, vec!["충분한 설명 제공"]);
        assert_eq!(result.score, 20);
    }
}
