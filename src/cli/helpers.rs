//! Shared helper functions for CLI commands

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{GlobalOpts, ParamArgs};
use crate::core::config::{Config, ConfigSource};
use crate::core::sensitivity::{SweepSummary, Volume};

/// Load the config file layer, apply command-line overrides and validate
pub fn resolve_config(global: &GlobalOpts, params: &ParamArgs) -> Result<Config> {
    let (config, source) = Config::load(global.config.as_deref()).into_diagnostic()?;
    match &source {
        ConfigSource::Defaults => log::info!("Using built-in defaults"),
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
    }

    let config = config.with_overrides(&params.overrides());
    log::debug!("Effective config: {:?}", config);

    config.validate().into_diagnostic()?;
    Ok(config)
}

/// Format an angle for tabular output
pub fn format_angle(angle: f64) -> String {
    format!("{:.4}", angle)
}

/// Format a volume for tabular output; degenerate angles print as `inf`
pub fn format_volume(volume: Volume) -> String {
    format!("{:.6}", volume)
}

/// Human-readable lines describing a sweep
pub fn summary_lines(summary: &SweepSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} points ({} degenerate)",
        summary.points, summary.infinite_points
    ));
    if let Some((angle, volume)) = summary.min {
        lines.push(format!("min volume {:.6} at {:.2}°", volume, angle));
    }
    if let Some((angle, volume)) = summary.max {
        lines.push(format!("max volume {:.6} at {:.2}°", volume, angle));
    }
    lines.push(format!(
        "volume at threshold {}°: {}",
        summary.threshold_degrees,
        format_volume(summary.at_threshold)
    ));

    lines
}

/// Print a summary block to stdout
pub fn print_summary(summary: &SweepSummary) {
    println!("{}", style("Summary").bold());
    for line in summary_lines(summary) {
        println!("  {}", line);
    }
}
