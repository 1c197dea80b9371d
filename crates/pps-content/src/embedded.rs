//! Embedded content data.
//!
//! The reference catalog is embedded at compile time using `include_str!()`
//! so the application runs without any content files on disk.

/// Default catalog: two blog-prompt exercises plus the dashboard content.
pub const DEFAULT_CATALOG: &str = include_str!("../data/catalog.toml");

/// Origin label used in logs and error messages for the embedded catalog.
pub const EMBEDDED_ORIGIN: &str = "<embedded>";
