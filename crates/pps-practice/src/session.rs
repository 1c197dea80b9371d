//! Practice session state machine.
//!
//! One `PracticeSession` exists per mounted practice view. It is created
//! fresh at `(step 0, empty draft, no evaluation)` and dropped when the view
//! goes away; nothing is persisted.
//!
//! ```text
//!             edit_draft / submit
//!   Drafting ───────submit──────▶ Evaluated ──advance──▶ Drafting (next step)
//!                                    │
//!                                    └─ on the last step: Complete
//! ```

use std::sync::Arc;

use pps_model::{EvaluationResult, ExerciseStep};
use tracing::debug;

use crate::error::{PracticeError, Result};
use crate::scorer::FeedbackScorer;

/// Where the learner is within the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No evaluation for the current step yet
    Drafting,
    /// Evaluated, and more steps remain
    Evaluated,
    /// Evaluated on the last step; no further advance is possible
    Complete,
}

/// Local state of the practice flow.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    steps: Arc<[ExerciseStep]>,
    scorer: FeedbackScorer,
    current_step_index: usize,
    draft_text: String,
    last_evaluation: Option<EvaluationResult>,
}

impl PracticeSession {
    /// Start a session over `steps`.
    ///
    /// # Errors
    ///
    /// Returns [`PracticeError::NoSteps`] if `steps` is empty.
    pub fn new(steps: impl Into<Arc<[ExerciseStep]>>, scorer: FeedbackScorer) -> Result<Self> {
        let steps = steps.into();
        if steps.is_empty() {
            return Err(PracticeError::NoSteps);
        }
        debug!(steps = steps.len(), "practice session started");
        Ok(Self {
            steps,
            scorer,
            current_step_index: 0,
            draft_text: String::new(),
            last_evaluation: None,
        })
    }

    /// Replace the draft text. The step and any evaluation are kept.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Score the current draft, replacing any previous evaluation.
    pub fn submit(&mut self) -> &EvaluationResult {
        let step = &self.steps[self.current_step_index];
        let result = self.scorer.evaluate(&self.draft_text, &step.requirements);
        debug!(step = %step.id, score = result.score, "draft submitted");
        self.last_evaluation.insert(result)
    }

    /// Move to the next step, clearing draft and evaluation.
    ///
    /// Returns `false` and leaves the session untouched on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_step_index += 1;
        self.draft_text.clear();
        self.last_evaluation = None;
        debug!(step = self.current_step_index, "advanced to next step");
        true
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        match (&self.last_evaluation, self.is_last_step()) {
            (None, _) => SessionPhase::Drafting,
            (Some(_), false) => SessionPhase::Evaluated,
            (Some(_), true) => SessionPhase::Complete,
        }
    }

    /// The step being worked on.
    pub fn current_step(&self) -> &ExerciseStep {
        &self.steps[self.current_step_index]
    }

    /// Zero-based index of the current step.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Number of steps in the session.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the current step is the last one.
    pub fn is_last_step(&self) -> bool {
        self.current_step_index + 1 == self.steps.len()
    }

    /// Whether [`advance`](Self::advance) would move forward.
    pub fn can_advance(&self) -> bool {
        !self.is_last_step()
    }

    /// Current draft text.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Most recent evaluation for the current step.
    pub fn last_evaluation(&self) -> Option<&EvaluationResult> {
        self.last_evaluation.as_ref()
    }

    /// Progress through the session, counting the current step as reached.
    pub fn progress_fraction(&self) -> f32 {
        (self.current_step_index + 1) as f32 / self.steps.len() as f32
    }

    /// Position label, e.g. `"1/2"`.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.current_step_index + 1, self.steps.len())
    }
}
