//! Layered fixture configuration
//!
//! Sources, later ones winning:
//! 1. the embedded `config/default.toml`, or the file named by
//!    `USER_FIXTURE_CONFIG_FILE` when set (the file replaces the defaults)
//! 2. `USER_FIXTURE_*` environment variables, `__` between nested keys
//!    (e.g. `USER_FIXTURE_LOGGING__LEVEL=debug`)
//!
//! Keys a file leaves out take the same values as `default.toml`. The file
//! is not merged over the embedded one because the config crate merges
//! arrays element by element, which would mix two seed lists.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use user_core::User;

use crate::error::{FixtureError, Result};
use crate::fixtures::default_seed_users;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
const ENV_PREFIX: &str = "USER_FIXTURE";
const CONFIG_FILE_VAR: &str = "USER_FIXTURE_CONFIG_FILE";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FixtureConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SeedConfig {
    /// Users the store starts with
    #[serde(default = "default_seed_users")]
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_format")]
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: default_seed_users(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> LogFormat {
    LogFormat::Compact
}

impl FixtureConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        builder = match env::var(CONFIG_FILE_VAR) {
            Ok(config_file) => builder.add_source(
                File::with_name(&config_file)
                    .required(true)
                    .format(FileFormat::Toml),
            ),
            Err(_) => builder.add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        };

        builder = builder.add_source(env_source());

        let config: FixtureConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file, with environment overrides
    pub fn from_file(path: &str) -> Result<Self> {
        let config: FixtureConfig = ConfigBuilder::builder()
            .add_source(File::with_name(path).format(FileFormat::Toml))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// The embedded defaults only, ignoring the environment
    pub fn embedded() -> Result<Self> {
        let config: FixtureConfig = ConfigBuilder::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(FixtureError::InvalidLogging(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )));
            }
        }

        let mut seen = HashSet::new();
        for user in &self.seed.users {
            if !seen.insert(user.id) {
                return Err(FixtureError::DuplicateSeedId(user.id));
            }
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
