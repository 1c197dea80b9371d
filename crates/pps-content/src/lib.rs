//! Content catalog loading for Prompt Practice Studio.
//!
//! This crate provides:
//!
//! - **Embedded catalog**: the reference Korean exercises and dashboard data
//! - **Loaders** from TOML files or strings
//! - **Validation** of catalog structure before it reaches the practice flow
//!
//! # Catalog Format
//!
//! ```text
//! title = "..."
//! [scoring]                  # optional, see ScoringRules
//! [[steps]]                  # ordered practice steps
//! [steps.example]            # good/bad example for the step above
//! [dashboard.progress]       # stat card figures
//! [[dashboard.modules]]
//! [[dashboard.recent_activities]]
//! ```
//!
//! # Example
//!
//! ```
//! let catalog = pps_content::load_embedded().unwrap();
//! assert_eq!(catalog.steps.len(), 2);
//! ```

pub mod embedded;
pub mod error;
pub mod loader;
pub mod validate;

pub use error::{ContentError, Result, ValidationError};
pub use loader::{from_toml_str, load, load_embedded, load_from_path};
pub use validate::validate;
