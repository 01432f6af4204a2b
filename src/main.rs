use anyhow::Result;
use clap::Parser;
use notify_icon::cli::{Cli, Commands};
use notify_icon::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None | Some(Commands::Generate) => commands::generate::run(&cli),
        Some(Commands::Check) => commands::check::run(&cli),
        Some(Commands::Init) => commands::init::run(&cli),
    }
}
