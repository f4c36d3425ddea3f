pub mod cli;
pub mod config;
pub mod env_file;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use cli::{Cli, Command};
use config::{Config, Settings};
use derive_more::Display;
use envkey_format::{EncodedSecret, EnvAssignment};
use tracing::{debug, info};
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CheckOutcome {
    #[display("up to date")]
    UpToDate,
    #[display("stale")]
    Stale,
    #[display("missing")]
    Missing,
}

/// Logs go to stderr so that stdout only carries the assignment and the confirmation.
pub fn setup_logger(log_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_filter)?,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
    Ok(())
}

pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<ExitCode> {
    let settings = Settings::resolve(cli, config)?;
    debug!(?settings, "resolved settings");
    match cli.command.unwrap_or_default() {
        Command::Encode => {
            encode_to_env_file(&settings, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let outcome = check_env_file(&settings)?;
            writeln!(out, "{}: {outcome}", settings.output.display())?;
            Ok(if outcome == CheckOutcome::UpToDate {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Encodes the source file, prints the assignment and overwrites the env file with it.
///
/// The source is read in full before anything is printed or written, so a missing
/// source never touches the env file.
pub fn encode_to_env_file(settings: &Settings, out: &mut impl Write) -> Result<EnvAssignment> {
    let assignment = {
        let bytes = fs_err::read(&settings.source).context("failed to read credential file")?;
        info!(source = ?settings.source, len = bytes.len(), "read credential file");
        EnvAssignment::new(settings.key.clone(), EncodedSecret::encode(bytes))
    };

    writeln!(out)?;
    writeln!(out, "{}", assignment.display_unmasked())?;

    env_file::replace(&settings.output, &assignment)?;

    writeln!(out)?;
    writeln!(out, "Saved to {} ✅", settings.output.display())?;
    info!(output = ?settings.output, value = ?assignment.value, "saved env file");
    Ok(assignment)
}

/// Compares the value stored in the env file with the current content of the source file.
pub fn check_env_file(settings: &Settings) -> Result<CheckOutcome> {
    let bytes = fs_err::read(&settings.source).context("failed to read credential file")?;
    let Some(value) = env_file::read_value(&settings.output, &settings.key)? else {
        return Ok(CheckOutcome::Missing);
    };
    let outcome = if value.decode()? == bytes {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Stale
    };
    info!(output = ?settings.output, %outcome, "checked env file");
    Ok(outcome)
}
