//! Error types for content loading operations.

use std::path::PathBuf;
use thiserror::Error;

/// Structural problems found in an otherwise well-formed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The catalog has no practice steps.
    #[error("catalog contains no practice steps")]
    NoSteps,

    /// A step has a blank identifier.
    #[error("step #{index} has an empty id")]
    EmptyStepId { index: usize },

    /// Two steps share the same identifier.
    #[error("duplicate step id '{id}'")]
    DuplicateStepId { id: String },

    /// A step has nothing to score against.
    #[error("step '{id}' has no requirements")]
    EmptyRequirements { id: String },

    /// A requirement phrase has no words to match.
    #[error("step '{id}' has a blank requirement at position {position}")]
    BlankRequirement { id: String, position: usize },

    /// A specificity marker is blank and would match every draft.
    #[error("specificity marker #{index} is blank")]
    BlankMarker { index: usize },

    /// A module reports more than 100 percent progress.
    #[error("module {id} has progress {progress}% (maximum is 100)")]
    ProgressOutOfRange { id: u32, progress: u8 },
}

/// Errors that can occur when loading a content catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    /// Failed to read the catalog file.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or does not match the schema.
    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// The catalog parsed but is unusable.
    #[error("Invalid catalog {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: ValidationError,
    },
}

/// Result type for content loading operations.
pub type Result<T> = std::result::Result<T, ContentError>;
