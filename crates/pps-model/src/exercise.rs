//! Practice exercise steps.

use serde::{Deserialize, Serialize};

/// A good/bad answer pair shown next to an exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePair {
    /// A prompt that satisfies the exercise well.
    pub good: String,
    /// A prompt that misses most of the requirements.
    pub bad: String,
}

impl ExamplePair {
    /// Create a new example pair.
    pub fn new(good: impl Into<String>, bad: impl Into<String>) -> Self {
        Self {
            good: good.into(),
            bad: bad.into(),
        }
    }
}

/// One stage of the guided practice flow.
///
/// Steps are immutable once loaded. The order of `requirements` only affects
/// the order of the produced feedback lines, never the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseStep {
    /// Stable identifier used for lookup (e.g. `"topic-selection"`).
    pub id: String,
    /// Short title of the exercise.
    pub title: String,
    /// Task description shown under the title.
    pub description: String,
    /// Requirement phrases the submitted prompt is checked against.
    pub requirements: Vec<String>,
    /// Example answers.
    #[serde(default)]
    pub example: ExamplePair,
}

impl ExerciseStep {
    /// Number of requirement phrases on this step.
    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }
}
