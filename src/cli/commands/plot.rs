//! `ovs plot` command - render the sensitivity chart

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{GlobalOpts, ParamArgs};
use crate::cli::helpers::{print_summary, resolve_config};
use crate::core::sensitivity::SweepSummary;
use crate::render::render_chart;

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PlotArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Also print a summary of the sweep
    #[arg(long, short = 's')]
    pub summary: bool,
}

pub fn run(args: PlotArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global, &args.params)?;
    let model = config.model();
    let domain = config.domain().points();

    log::info!(
        "Sweeping {} points from {}° to {}°",
        domain.len(),
        config.domain_start,
        config.domain_end
    );
    let samples = model.sweep(&domain);

    let path = render_chart(&samples, &config).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Plot saved to {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        if args.summary {
            let summary =
                SweepSummary::from_samples(&samples, &model, config.threshold_marker_degrees);
            print_summary(&summary);
        }
    }

    Ok(())
}
