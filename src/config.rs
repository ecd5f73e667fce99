//! Application configuration.

use crate::consts::cli_consts::refresh;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, path::Path};

/// Optional settings read from `~/.crypto-tracker/config.json`.
///
/// Every field may be omitted; command-line flags take precedence.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of a CoinGecko-compatible API.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Seconds between automatic refreshes.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
    /// Whether to paint the dashboard background.
    #[serde(default)]
    pub with_background_color: Option<bool>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, falling back to defaults when it does not.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Settings in effect after applying command-line overrides to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub refresh_interval: Duration,
    pub with_background_color: bool,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub environment: Option<Environment>,
    pub refresh_interval_secs: Option<u64>,
    pub with_background_color: bool,
}

impl Config {
    /// Merges `overrides` over this config, then over built-in defaults.
    ///
    /// # Errors
    /// Returns a message if the config file's `api_url` is not a valid environment
    /// or its refresh interval is zero.
    pub fn resolve(&self, overrides: Overrides) -> Result<Settings, String> {
        let environment = match overrides.environment {
            Some(environment) => environment,
            None => match &self.api_url {
                Some(url) => url.parse::<Environment>()?,
                None => Environment::default(),
            },
        };

        let refresh_interval = match overrides.refresh_interval_secs.or(self.refresh_interval_secs) {
            Some(0) => return Err("refresh interval must be at least one second".to_string()),
            Some(secs) => Duration::from_secs(secs),
            None => refresh::refresh_interval(),
        };

        Ok(Settings {
            environment,
            refresh_interval,
            with_background_color: overrides.with_background_color
                || self.with_background_color.unwrap_or(false),
        })
    }
}

/// Location of the config file inside the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".crypto-tracker").join("config.json"))
}
