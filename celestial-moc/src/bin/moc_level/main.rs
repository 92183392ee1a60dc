//! moc-level: HEALPix level selection and binning from the command line
//!
//! Logs go to stderr through `tracing`; `RUST_LOG` sets the filter and
//! `--verbose` forces `debug`.

mod bin;
mod cli;
mod error_level;
mod grid;
mod level;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Level(args) => level::run(args, &cli),
        Commands::ErrorLevel(args) => error_level::run(args, &cli),
        Commands::Bin(args) => bin::run(args, &cli),
        Commands::Grid(args) => grid::run(args, &cli),
    }
}
