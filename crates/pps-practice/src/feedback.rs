//! Feedback findings.
//!
//! Each check of the scorer yields one [`Finding`]. A finding carries only
//! the data it needs and knows which strength, weakness and suggestion lines
//! it contributes and how many points it is worth.

use pps_model::ScoringRules;

/// Outcome of a single check against a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Draft is longer than the detail threshold
    DetailSufficient,
    /// Draft is at or below the detail threshold
    DetailInsufficient,
    /// At least one word of the requirement appears in the draft
    RequirementMet { requirement: String },
    /// No word of the requirement appears in the draft
    RequirementMissing { requirement: String },
    /// A specificity marker appears in the draft
    SpecificityPresent,
    /// No specificity marker appears in the draft
    SpecificityMissing,
}

impl Finding {
    /// Points awarded for this finding.
    pub fn points(&self, rules: &ScoringRules) -> u32 {
        match self {
            Self::DetailSufficient => rules.detail_points,
            Self::RequirementMet { .. } => rules.requirement_points,
            Self::SpecificityPresent => rules.specificity_points,
            Self::DetailInsufficient
            | Self::RequirementMissing { .. }
            | Self::SpecificityMissing => 0,
        }
    }

    /// Strength line, if any.
    pub fn strength(&self) -> Option<String> {
        match self {
            Self::DetailSufficient => Some("충분한 설명 제공".to_string()),
            Self::RequirementMet { requirement } => Some(format!("{requirement} 요구사항 충족")),
            Self::SpecificityPresent => Some("구체적인 설명 포함".to_string()),
            _ => None,
        }
    }

    /// Weakness line, if any.
    ///
    /// A missing specificity marker deliberately produces no weakness, only a
    /// suggestion.
    pub fn weakness(&self) -> Option<String> {
        match self {
            Self::DetailInsufficient => Some("설명이 부족함".to_string()),
            Self::RequirementMissing { requirement } => Some(format!("{requirement} 관련 내용 누락")),
            _ => None,
        }
    }

    /// Suggestion line, if any.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::DetailInsufficient => Some("더 자세한 설명을 추가해보세요".to_string()),
            Self::RequirementMissing { requirement } => {
                Some(format!("{requirement}에 대한 내용을 추가해보세요"))
            }
            Self::SpecificityMissing => Some("더 구체적인 예시나 설명을 추가해보세요".to_string()),
            _ => None,
        }
    }
}
