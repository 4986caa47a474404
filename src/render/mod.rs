//! Chart rendering - turns a sweep into a PNG figure

pub mod chart;
pub mod clip;

pub use chart::{render_chart, RenderError};
pub use clip::{clip_runs, ViewBox};
