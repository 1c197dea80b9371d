//! Prompt Practice Studio - GUI Library
//!
//! Desktop front end for practising Korean blog-writing prompts: a progress
//! dashboard, a step-by-step practice flow with instant feedback, and the
//! navigation shell around them.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
