//! Catalog structure checks.
//!
//! Parsing only guarantees the shape of the document. These checks make sure
//! the practice flow has at least one scorable step, that every phrase the
//! scorer matches on has words in it, and that dashboard figures are in
//! range.

use std::collections::BTreeSet;

use pps_model::ContentCatalog;

use crate::error::ValidationError;

/// Validate a parsed catalog, returning the first problem found.
pub fn validate(catalog: &ContentCatalog) -> Result<(), ValidationError> {
    if catalog.steps.is_empty() {
        return Err(ValidationError::NoSteps);
    }

    let mut seen = BTreeSet::new();
    for (index, step) in catalog.steps.iter().enumerate() {
        if step.id.trim().is_empty() {
            return Err(ValidationError::EmptyStepId { index });
        }
        if !seen.insert(step.id.as_str()) {
            return Err(ValidationError::DuplicateStepId {
                id: step.id.clone(),
            });
        }
        if step.requirements.is_empty() {
            return Err(ValidationError::EmptyRequirements {
                id: step.id.clone(),
            });
        }
        // Whitespace-only requirements split into no words and can never be met
        if let Some(position) = step.requirements.iter().position(|r| r.trim().is_empty()) {
            return Err(ValidationError::BlankRequirement {
                id: step.id.clone(),
                position,
            });
        }
    }

    // An empty marker is a substring of every draft
    if let Some(index) = catalog
        .scoring
        .specificity_markers
        .iter()
        .position(|marker| marker.trim().is_empty())
    {
        return Err(ValidationError::BlankMarker { index });
    }

    for module in &catalog.dashboard.modules {
        if module.progress > 100 {
            return Err(ValidationError::ProgressOutOfRange {
                id: module.id,
                progress: module.progress,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pps_model::{ExamplePair, ExerciseStep, ModuleStatus, ModuleSummary};

    fn step(id: &str, requirements: &[&str]) -> ExerciseStep {
        ExerciseStep {
            id: id.to_string(),
            title: "제목".to_string(),
            description: "설명".to_string(),
            requirements: requirements.iter().map(|r| (*r).to_string()).collect(),
            example: ExamplePair::default(),
        }
    }

    fn catalog(steps: Vec<ExerciseStep>) -> ContentCatalog {
        ContentCatalog {
            steps,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_catalog() {
        let c = catalog(vec![step("a", &["타겟 독자층 명시"])]);
        assert_eq!(validate(&c), Ok(()));
    }

    #[test]
    fn test_no_steps() {
        assert_eq!(validate(&catalog(vec![])), Err(ValidationError::NoSteps));
    }

    #[test]
    fn test_duplicate_step_id() {
        let c = catalog(vec![step("a", &["x"]), step("a", &["y"])]);
        assert_eq!(
            validate(&c),
            Err(ValidationError::DuplicateStepId {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_blank_requirements() {
        let c = catalog(vec![step("a", &["  "])]);
        assert_eq!(
            validate(&c),
            Err(ValidationError::BlankRequirement {
                id: "a".to_string(),
                position: 0
            })
        );
        let c = catalog(vec![step("b", &[])]);
        assert!(matches!(
            validate(&c),
            Err(ValidationError::EmptyRequirements { .. })
        ));
    }

    #[test]
    fn test_blank_requirement_next_to_real_ones() {
        let c = catalog(vec![step("a", &["타겟 독자층 명시", "", "주제 범위 설정"])]);
        assert_eq!(
            validate(&c),
            Err(ValidationError::BlankRequirement {
                id: "a".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_blank_specificity_marker() {
        let mut c = catalog(vec![step("a", &["r"])]);
        c.scoring.specificity_markers = vec!["예시".to_string(), String::new()];
        assert_eq!(validate(&c), Err(ValidationError::BlankMarker { index: 1 }));

        c.scoring.specificity_markers = vec![" ".to_string()];
        assert_eq!(validate(&c), Err(ValidationError::BlankMarker { index: 0 }));
    }

    #[test]
    fn test_no_specificity_markers_is_valid() {
        let mut c = catalog(vec![step("a", &["r"])]);
        c.scoring.specificity_markers.clear();
        assert_eq!(validate(&c), Ok(()));
    }

    #[test]
    fn test_empty_id() {
        let c = catalog(vec![step("x", &["r"]), step(" ", &["r"])]);
        assert_eq!(
            validate(&c),
            Err(ValidationError::EmptyStepId { index: 1 })
        );
    }

    #[test]
    fn test_module_progress_range() {
        let mut c = catalog(vec![step("a", &["r"])]);
        c.dashboard.modules.push(ModuleSummary {
            id: 9,
            title: "모듈".to_string(),
            progress: 101,
            status: ModuleStatus::InProgress,
            lessons: vec![],
        });
        assert_eq!(
            validate(&c),
            Err(ValidationError::ProgressOutOfRange {
                id: 9,
                progress: 101
            })
        );
    }
}
