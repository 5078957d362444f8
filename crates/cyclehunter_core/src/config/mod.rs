//! Settings persistence for Cycle Hunter.
//!
//! This module provides:
//! - The settings store (bodies, lookback multiples, last opened file)
//! - JSON document format with exact decimal strings
//! - Atomic file writes (write to temp, then rename)
//! - Fallback to the default catalog when the file is missing or corrupt
//!
//! # Example
//!
//! ```no_run
//! use cyclehunter_core::catalog::CatalogRevision;
//! use cyclehunter_core::config::{JsonFileBackend, LoadStatus, SettingsLocation, SettingsStore};
//!
//! let location = SettingsLocation::from_env();
//! let (mut store, status) =
//!     SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::default());
//!
//! if let LoadStatus::Corrupt(err) = &status {
//!     eprintln!("Previous settings could not be read ({}), using defaults", err);
//! }
//!
//! store.set_body_enabled("G.Sun", true);
//! for ps in store.enabled_body_selections() {
//!     println!("{}", ps.display_name());
//! }
//!
//! store.save().unwrap();
//! ```

mod backend;
mod document;
mod error;
mod location;
mod store;

pub use backend::{JsonFileBackend, SettingsBackend};
pub use error::{ConfigError, ConfigResult};
pub use location::{SettingsLocation, SETTINGS_DIRECTORY, SETTINGS_FILENAME};
pub use store::{LoadStatus, SettingsStore};
