//! OVS: Overlap Sensitivity Toolkit
//!
//! Sweeps the overlap volume `V = t²h / sin(θ)` of an intersection region over
//! a range of intersection angles and charts the result.

pub mod cli;
pub mod core;
pub mod logging;
pub mod render;
