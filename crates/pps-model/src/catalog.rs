//! The content bundle injected at startup.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardContent;
use crate::exercise::ExerciseStep;
use crate::scoring::ScoringRules;

/// All static content the application renders and scores against.
///
/// Steps keep their authored order; [`ContentCatalog::step`] provides the
/// id-based lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    /// Application title shown in the top bar.
    #[serde(default)]
    pub title: String,
    /// Practice steps in order.
    #[serde(default)]
    pub steps: Vec<ExerciseStep>,
    /// Scoring rules.
    #[serde(default)]
    pub scoring: ScoringRules,
    /// Dashboard content.
    #[serde(default)]
    pub dashboard: DashboardContent,
}

impl ContentCatalog {
    /// Find a step by id.
    pub fn step(&self, id: &str) -> Option<&ExerciseStep> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Step ids in order.
    pub fn step_ids(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::ExamplePair;

    fn step(id: &str) -> ExerciseStep {
        ExerciseStep {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            requirements: vec!["요구사항".to_string()],
            example: ExamplePair::default(),
        }
    }

    #[test]
    fn test_step_lookup_preserves_order() {
        let catalog = ContentCatalog {
            steps: vec![step("b"), step("a")],
            ..Default::default()
        };
        assert_eq!(catalog.step_ids().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(catalog.step("a").map(|s| s.title.as_str()), Some("A"));
        assert!(catalog.step("missing").is_none());
    }
}
