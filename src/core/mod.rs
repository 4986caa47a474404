//! Core module - the sensitivity kernel, sweep domain and configuration

pub mod config;
pub mod domain;
pub mod sensitivity;

pub use config::{Config, ConfigError, ConfigOverrides, ConfigSource};
pub use domain::SweepDomain;
pub use sensitivity::{evaluate, Sample, SensitivityModel, SweepSummary, Volume};
