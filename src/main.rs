use clap::Parser;
use miette::Result;
use ovs::cli::commands::plot::PlotArgs;
use ovs::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    ovs::logging::init(cli.global.verbose);

    let global = cli.global;
    match cli.command {
        None => ovs::cli::commands::plot::run(PlotArgs::default(), &global),
        Some(Commands::Plot(args)) => ovs::cli::commands::plot::run(args, &global),
        Some(Commands::Sample(args)) => ovs::cli::commands::sample::run(args, &global),
        Some(Commands::Eval(args)) => ovs::cli::commands::eval::run(args, &global),
        Some(Commands::Preview(args)) => ovs::cli::commands::preview::run(args, &global),
        Some(Commands::Config(cmd)) => ovs::cli::commands::config::run(cmd, &global),
        Some(Commands::Completions(args)) => ovs::cli::commands::completions::run(args),
    }
}
