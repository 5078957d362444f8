//! Errors raised while loading, validating or saving settings.

use std::io;
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Lookback multiple must be greater than zero, got {0}")]
    InvalidMultiple(Decimal),

    #[error("Color channel '{channel}' must be within [0, 1], got {value}")]
    InvalidColor { channel: &'static str, value: Decimal },
}

impl ConfigError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
