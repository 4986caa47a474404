//! `ovs completions` command - shell completion scripts

use clap::CommandFactory;
use clap_complete::Shell;
use miette::Result;

use crate::cli::Cli;

#[derive(clap::Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
