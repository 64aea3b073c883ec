//! CLI error type.
//!
//! Everything that can stop `shop` ends up here. [`run`](crate::run) logs
//! it with `tracing::error!` and prints it once to stderr.

use shop_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad item spec or invalid product.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
