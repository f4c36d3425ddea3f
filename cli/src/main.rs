use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use envkey::{cli::Cli, config::Config, run, setup_logger};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::parse(path)?,
        None => Config::default(),
    };
    setup_logger(&config.log_filter)?;
    run(&cli, &config, &mut io::stdout().lock())
}
