use consensus_core::errors::NetworkTypeError;
use consensus_core::NetworkType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Network(#[from] NetworkTypeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_network")]
    pub network: NetworkType,
    pub log_level: String,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Height to evaluate forks at; activation heights only when unset
    pub height: Option<u32>,
    pub json: bool,
}

/// Same spellings as `--network`: case-insensitive, `main`/`test` aliases.
fn deserialize_network<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NetworkType, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) -> Result<(), ConfigError> {
        if let Some(network) = &args.network {
            self.network = network.parse()?;
        }

        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }

        if args.height.is_some() {
            self.report.height = args.height;
        }

        if args.json {
            self.report.json = true;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { network: NetworkType::Mainnet, log_level: "info".to_string(), report: ReportConfig::default() }
    }
}
