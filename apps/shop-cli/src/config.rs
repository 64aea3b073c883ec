//! # Configuration
//!
//! Loaded from environment variables with fallback to defaults, then
//! overridden by command-line flags.
//!
//! ## Sources (Priority Order)
//! 1. Command-line flags (`--calculator`, `--json`)
//! 2. Environment variables (`SHOP_*`)
//! 3. Defaults (this file)
//!
//! `RUST_LOG`, when set, replaces `SHOP_LOG` entirely.

use serde::{Deserialize, Serialize};
use shop_core::CalculatorKind;
use std::fmt;
use std::str::FromStr;

use crate::cli::Cli;

/// Default tracing filter when neither `RUST_LOG` nor `SHOP_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,shop=info";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per calculator.
    #[default]
    Text,
    /// A JSON array of cart summaries.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "SHOP_OUTPUT".to_string(),
                reason: format!("'{other}' is not one of: text, json"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Runtime configuration for the `shop` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Calculator used when `--all` is not given.
    /// Env: `SHOP_CALCULATOR` (default: base)
    pub calculator: CalculatorKind,

    /// Env: `SHOP_OUTPUT` (default: text)
    pub output: OutputFormat,

    /// Fallback tracing filter directives.
    /// Env: `SHOP_LOG` (default: `warn,shop=info`)
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            calculator: CalculatorKind::Base,
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShopConfig {
    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShopConfig::default();

        let calculator = match lookup("SHOP_CALCULATOR") {
            Some(raw) => raw
                .parse::<CalculatorKind>()
                .map_err(|err| ConfigError::InvalidValue {
                    key: "SHOP_CALCULATOR".to_string(),
                    reason: err.to_string(),
                })?,
            None => defaults.calculator,
        };

        let output = match lookup("SHOP_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => defaults.output,
        };

        let log_filter = lookup("SHOP_LOG")
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(ShopConfig {
            calculator,
            output,
            log_filter,
        })
    }

    /// Applies command-line overrides on top of environment values.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(calculator) = cli.calculator {
            self.calculator = calculator;
        }
        if cli.json {
            self.output = OutputFormat::Json;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
