//! `ovs config` command - inspect and create configuration files

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::args::{GlobalOpts, ParamArgs};
use crate::cli::helpers::resolve_config;
use crate::core::config::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show(ShowArgs),

    /// Write a config file populated with the defaults
    Init(InitArgs),

    /// Print the location of the user config file
    Path,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the file (defaults to the user config file)
    #[arg(long, short = 'p')]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Init(args) => run_init(args, global),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global, &args.params)?;
    print!("{}", config.to_yaml().into_diagnostic()?);
    Ok(())
}

fn run_init(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| miette::miette!("Could not determine a user config directory"))?,
    };

    Config::default()
        .write_to(&path, args.force)
        .into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Wrote default config to {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}

fn run_path() -> Result<()> {
    let path = Config::user_config_path()
        .ok_or_else(|| miette::miette!("Could not determine a user config directory"))?;
    println!("{}", path.display());
    Ok(())
}
