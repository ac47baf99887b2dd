#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::domain::model::{DEFAULT_MAX_FACTORIAL_INPUT, MAX_CONFIGURABLE_FACTORIAL_INPUT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-numerics")]
#[command(about = "Exact factorials, primality checks and big-number multiplication")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: cli::Command,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the largest accepted factorial input
    #[arg(long, global = true)]
    pub max_factorial_input: Option<i64>,

    /// Print the JSON response body instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers the command line over the optional TOML file over defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Settings::layered(self.max_factorial_input, file.as_ref()))
    }
}

/// Effective settings after all configuration sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_factorial_input: i64,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_factorial_input: DEFAULT_MAX_FACTORIAL_INPUT,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn layered(max_override: Option<i64>, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        Self {
            max_factorial_input: max_override
                .or_else(|| file.and_then(TomlConfig::configured_max_factorial_input))
                .unwrap_or(defaults.max_factorial_input),
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
        }
    }
}

impl ConfigProvider for Settings {
    fn max_factorial_input(&self) -> i64 {
        self.max_factorial_input
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "max_factorial_input",
            self.max_factorial_input,
            0,
            MAX_CONFIGURABLE_FACTORIAL_INPUT,
        )
    }
}
