//! Logging setup for Cycle Hunter.
//!
//! The library logs through `tracing` macros; the application installs the
//! subscriber once at startup through [`init_tracing`].

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default verbosity when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// `RUST_LOG` if it parses, otherwise `default_level`.
pub fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

/// Install the global subscriber: stderr always, plus `file_writer` without
/// ANSI colours when one is given.
///
/// Must be called at most once per process.
pub fn init_tracing<W>(default_level: LogLevel, file_writer: Option<W>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_layer = file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .with(env_filter(default_level))
        .init();
}
