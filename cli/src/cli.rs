use std::path::PathBuf;

use clap::{Parser, Subcommand};
use envkey_format::EnvKey;

/// Encode a credential file as base64 and save it to an env file.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Cli {
    /// Optional json5 config file.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Credential file to encode.
    #[clap(long, global = true)]
    pub source: Option<PathBuf>,
    /// Env file to overwrite.
    #[clap(long, global = true)]
    pub output: Option<PathBuf>,
    /// Variable name to assign.
    #[clap(long, global = true)]
    pub key: Option<EnvKey>,
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Encode the credential file and overwrite the env file (default).
    #[default]
    Encode,
    /// Check that the env file holds the current encoding of the credential file.
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["envkey"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.source.is_none());

        let cli = Cli::try_parse_from([
            "envkey", "check", "--source", "key.json", "--key", "SERVICE_KEY",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Check));
        assert_eq!(cli.source, Some(PathBuf::from("key.json")));
        assert_eq!(cli.key.unwrap().as_str(), "SERVICE_KEY");

        Cli::try_parse_from(["envkey", "--key", "BAD-NAME"]).unwrap_err();
    }
}
