mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{inspect, redistrict};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    match &cli.command {
        Commands::Inspect(args) => inspect::run(&cli, args),
        Commands::Redistrict(args) => redistrict::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
