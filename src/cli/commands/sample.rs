//! `ovs sample` command - print the sampled sweep

use miette::Result;

use crate::cli::args::{GlobalOpts, OutputFormat, ParamArgs};
use crate::cli::helpers::{print_summary, resolve_config};
use crate::cli::output::format_samples;
use crate::core::sensitivity::SweepSummary;

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SampleArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,

    /// Only print the summary, not the samples
    #[arg(long)]
    pub summary: bool,

    /// Show only the count of samples
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: SampleArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global, &args.params)?;
    let model = config.model();
    let samples = model.sweep(&config.domain().points());
    log::info!("Sampled {} points", samples.len());

    if args.count {
        println!("{}", samples.len());
        return Ok(());
    }

    if args.summary {
        let summary = SweepSummary::from_samples(&samples, &model, config.threshold_marker_degrees);
        print_summary(&summary);
        return Ok(());
    }

    print!("{}", format_samples(&samples, args.format)?);
    Ok(())
}
