//! CLI command implementations

pub mod completions;
pub mod config;
pub mod eval;
pub mod plot;
pub mod preview;
pub mod sample;
