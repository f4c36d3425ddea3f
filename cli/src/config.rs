use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use envkey_format::EnvKey;
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_SOURCE: &str = "auramed-455016-201ba9c39ca4.json";
pub const DEFAULT_OUTPUT: &str = ".env.local";
pub const DEFAULT_KEY: &str = "GOOGLE_KEY_BASE64";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub key: Option<EnvKey>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            output: None,
            key: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn parse(path: &Path) -> Result<Self> {
        json5::from_str(&fs_err::read_to_string(path)?)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Paths and key name used by a run, after applying CLI flags and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub output: PathBuf,
    pub key: EnvKey,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let key = match cli.key.as_ref().or(config.key.as_ref()) {
            Some(key) => key.clone(),
            None => DEFAULT_KEY.parse()?,
        };
        Ok(Self {
            source: cli
                .source
                .clone()
                .or_else(|| config.source.clone())
                .unwrap_or_else(|| DEFAULT_SOURCE.into()),
            output: cli
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| DEFAULT_OUTPUT.into()),
            key,
        })
    }
}
