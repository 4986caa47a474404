//! `ovs preview` command - braille chart in the terminal

use miette::Result;

use crate::cli::args::{GlobalOpts, ParamArgs};
use crate::cli::helpers::resolve_config;
use crate::cli::viz::{
    render_curve_preview, PREVIEW_HEIGHT, PREVIEW_MAX, PREVIEW_MIN, PREVIEW_WIDTH,
};

#[derive(clap::Args, Debug, Clone, Default)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Canvas width in braille dots
    #[arg(
        long,
        default_value_t = PREVIEW_WIDTH,
        value_parser = clap::value_parser!(u32).range(PREVIEW_MIN as i64..=PREVIEW_MAX as i64)
    )]
    pub width: u32,

    /// Canvas height in braille dots
    #[arg(
        long = "rows",
        default_value_t = PREVIEW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(PREVIEW_MIN as i64..=PREVIEW_MAX as i64)
    )]
    pub rows: u32,
}

pub fn run(args: PreviewArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global, &args.params)?;
    let samples = config.model().sweep(&config.domain().points());

    println!(
        "{}",
        render_curve_preview(&samples, &config, args.width, args.rows)
    );
    Ok(())
}
