//! Error types for practice sessions.

use thiserror::Error;

/// Errors raised when setting up a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PracticeError {
    /// A session needs at least one step.
    #[error("a practice session needs at least one exercise step")]
    NoSteps,
}

/// Result type for practice operations.
pub type Result<T> = std::result::Result<T, PracticeError>;
