//! Command-line argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::eval::EvalArgs;
use crate::cli::commands::plot::PlotArgs;
use crate::cli::commands::preview::PreviewArgs;
use crate::cli::commands::sample::SampleArgs;
use crate::core::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "ovs",
    author,
    version,
    about = "Overlap Sensitivity Toolkit - chart overlap volume against intersection angle",
    long_about = "Overlap Sensitivity Toolkit. Sweeps the overlap volume V = t²h / sin(θ) of an intersection region over a \
                  range of intersection angles and renders the curve, with a threshold marker, \
                  to a PNG chart. Run without a subcommand to render with the configured defaults."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options accepted by every subcommand
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// YAML config file (defaults to the user config file when present)
    #[arg(long, global = true, env = "OVS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sensitivity chart to a PNG file (default)
    Plot(PlotArgs),

    /// Print the sampled sweep
    Sample(SampleArgs),

    /// Evaluate the overlap volume at specific angles
    Eval(EvalArgs),

    /// Draw a braille preview of the curve in the terminal
    Preview(PreviewArgs),

    /// Show or create configuration files
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for printed data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TSV for lists, YAML for single records
    #[default]
    Auto,
    Tsv,
    Csv,
    Json,
    Yaml,
    /// Boxed table for reading in a terminal
    Table,
}

/// Sweep, physics and presentation overrides shared by the commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// First sweep angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Last sweep angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Number of sweep points
    #[arg(long, short = 'n')]
    pub points: Option<usize>,

    /// Material thickness t
    #[arg(long, short = 't')]
    pub thickness: Option<f64>,

    /// Region height h
    #[arg(long = "height")]
    pub height: Option<f64>,

    /// Angles below this (degrees) are reported as infinite volume
    #[arg(long)]
    pub floor: Option<f64>,

    /// Angle (degrees) of the threshold marker line
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Lower x axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Upper x axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Lower y axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Upper y axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Output image path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output resolution in DPI
    #[arg(long)]
    pub dpi: Option<u32>,
}

impl ParamArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            domain_start: self.start,
            domain_end: self.end,
            point_count: self.points,
            thickness: self.thickness,
            height: self.height,
            degenerate_floor_degrees: self.floor,
            threshold_marker_degrees: self.threshold,
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
            output_path: self.output.clone(),
            output_resolution: self.dpi,
        }
    }
}
