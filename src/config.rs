use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Environment variable pointing at the directory holding `display.toml`
pub const CONFIG_DIR_ENV: &str = "DEX_INFO_CONFIG_DIR";

/// Prefix for per-key environment overrides (e.g. `DEX_INFO__EXPLORER__BASE_URL`)
pub const ENV_PREFIX: &str = "DEX_INFO";

/// Block explorer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL without a trailing slash (e.g. https://etherscan.io)
    pub base_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://etherscan.io".to_string(),
        }
    }
}

/// Currency rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// ISO 4217 code
    pub code: String,
    /// Symbol placed in front of the amount
    pub symbol: String,
    /// Digits after the decimal point
    pub fraction_digits: usize,
    /// Separator between groups of three integer digits
    pub group_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            fraction_digits: 2,
            group_separator: ",".to_string(),
        }
    }
}

/// Dashboard display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Explorer used for transaction, address, token and block links
    pub explorer: ExplorerConfig,
    /// Currency used by the configurable currency formatter
    pub currency: CurrencyConfig,
    /// Default log level for the command-line front end
    pub log_level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            explorer: ExplorerConfig::default(),
            currency: CurrencyConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Directory holding the configuration file
    pub fn config_dir() -> PathBuf {
        PathBuf::from(env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "config".to_string()))
    }

    /// Load configuration from the default directory plus environment overrides
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::config_dir())
    }

    /// Load configuration from `<dir>/display.toml` plus environment overrides.
    ///
    /// A missing file is not an error; every field falls back to its default.
    pub fn load_from(dir: &Path) -> Result<Self, Error> {
        let file = dir.join("display");
        let settings = ConfigLoader::builder()
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config = settings.try_deserialize::<DisplayConfig>()?;
        tracing::debug!(dir = %dir.display(), explorer = %config.explorer.base_url, "loaded display config");
        Ok(config)
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_usd_dashboard() {
        let config = DisplayConfig::default();
        assert_eq!(config.explorer.base_url, "https://etherscan.io");
        assert_eq!(config.currency.code, "USD");
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.fraction_digits, 2);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let rendered = DisplayConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[explorer]"));
        assert!(rendered.contains("[currency]"));
        assert!(rendered.contains("base_url = \"https://etherscan.io\""));
    }
}
