//! Data model types for Prompt Practice Studio.
//!
//! This crate holds the plain data shared by every other crate in the
//! workspace. Nothing here performs I/O or scoring; loading lives in
//! `pps-content` and evaluation in `pps-practice`.
//!
//! # Module Organization
//!
//! - [`exercise`]: Practice exercise steps and their example answers
//! - [`evaluation`]: The structured result of scoring one draft
//! - [`scoring`]: Tunable scoring rules (thresholds, points, markers)
//! - [`dashboard`]: Learning progress, module summaries, recent activity
//! - [`catalog`]: The full content bundle injected at startup
//!
//! # Example
//!
//! ```
//! use pps_model::{ExamplePair, ExerciseStep};
//!
//! let step = ExerciseStep {
//!     id: "topic".to_string(),
//!     title: "주제 선정 프롬프트".to_string(),
//!     description: "블로그 주제를 도출하기 위한 프롬프트를 작성해보세요.".to_string(),
//!     requirements: vec!["타겟 독자층 명시".to_string()],
//!     example: ExamplePair::new("좋은 예시", "나쁜 예시"),
//! };
//!
//! assert_eq!(step.requirement_count(), 1);
//! ```

pub mod catalog;
pub mod dashboard;
pub mod evaluation;
pub mod exercise;
pub mod scoring;

pub use catalog::ContentCatalog;
pub use dashboard::{
    DashboardContent, LearningProgress, ModuleStatus, ModuleSummary, RecentActivity,
};
pub use evaluation::EvaluationResult;
pub use exercise::{ExamplePair, ExerciseStep};
pub use scoring::ScoringRules;
