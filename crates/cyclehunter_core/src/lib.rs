//! Cycle Hunter Core - settings model and persistence for Cycle Hunter
//!
//! This crate contains the configuration model with zero UI dependencies:
//! the selectable bodies and lookback multiples, the default catalogs, and
//! the settings store that loads and saves them.

pub mod catalog;
pub mod config;
pub mod ephemeris;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
