//! Prompt feedback scoring and the practice session state machine.
//!
//! - [`scorer`]: [`FeedbackScorer`], a pure keyword heuristic over a draft
//! - [`feedback`]: the per-check [`Finding`]s the scorer produces
//! - [`session`]: [`PracticeSession`], the step/draft/evaluation state
//!
//! Nothing here performs I/O; every call returns synchronously.
//!
//! # Example
//!
//! ```
//! use pps_practice::evaluate;
//!
//! let result = evaluate("", &["타겟 독자층 명시"]);
//! assert_eq!(result.score, 0);
//! assert_eq!(result.weaknesses.len(), 2);
//! assert_eq!(result.suggestions.len(), 3);
//! ```

pub mod error;
pub mod feedback;
pub mod scorer;
pub mod session;

pub use error::{PracticeError, Result};
pub use feedback::Finding;
pub use scorer::{FeedbackScorer, evaluate};
pub use session::{PracticeSession, SessionPhase};
