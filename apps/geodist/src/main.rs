mod cli;
mod haversine;
mod matching;
mod points;

use clap::Parser;
use color_eyre::Result;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    cli::run(&args.command)
}
