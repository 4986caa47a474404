//! `ovs eval` command - evaluate individual angles

use miette::Result;

use crate::cli::args::{GlobalOpts, OutputFormat, ParamArgs};
use crate::cli::helpers::resolve_config;
use crate::cli::output::format_samples;
use crate::core::sensitivity::Sample;

#[derive(clap::Args, Debug, Clone, Default)]
pub struct EvalArgs {
    /// Intersection angles in degrees
    #[arg(required = true, allow_negative_numbers = true)]
    pub angles: Vec<f64>,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,
}

pub fn run(args: EvalArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global, &args.params)?;
    let model = config.model();

    let samples: Vec<Sample> = model.samples(&args.angles).collect();
    print!("{}", format_samples(&samples, args.format)?);
    Ok(())
}
