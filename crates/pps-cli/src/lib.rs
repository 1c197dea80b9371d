//! CLI library components for Prompt Practice Studio.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
