//! Resolution of the per-user settings location.

use std::path::{Path, PathBuf};

/// Directory under the user root holding all application data.
pub const SETTINGS_DIRECTORY: &str = ".cycleHunter";

/// Name of the JSON settings document.
pub const SETTINGS_FILENAME: &str = "cycleHunterSettings.json";

/// Root directory under which the settings directory lives.
///
/// Resolved once at startup and handed to the backend; nothing else reads
/// the process environment for paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocation {
    root: PathBuf,
    degraded: bool,
}

impl SettingsLocation {
    /// Resolve from the user's home directory.
    pub fn from_env() -> Self {
        Self::resolve(dirs::home_dir())
    }

    /// Use `home` as the root, or the system temp directory when it is
    /// absent or empty.
    ///
    /// The temp directory is not durable across reboots on every platform,
    /// so falling back to it is logged as a warning.
    pub fn resolve(home: Option<PathBuf>) -> Self {
        match home.filter(|p| !p.as_os_str().is_empty()) {
            Some(root) => {
                tracing::debug!("User home directory is: {}", root.display());
                Self {
                    root,
                    degraded: false,
                }
            }
            None => {
                let root = std::env::temp_dir();
                tracing::warn!(
                    "Could not determine the user home directory, storing settings under {} instead. \
                     Settings may not survive a reboot.",
                    root.display()
                );
                Self {
                    root,
                    degraded: true,
                }
            }
        }
    }

    /// Root the settings directory is created under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the fallback root is in use.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// `<root>/.cycleHunter`
    pub fn settings_dir(&self) -> PathBuf {
        self.root.join(SETTINGS_DIRECTORY)
    }

    /// `<root>/.cycleHunter/cycleHunterSettings.json`
    pub fn settings_file(&self) -> PathBuf {
        self.settings_dir().join(SETTINGS_FILENAME)
    }

    /// Directory for application log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.settings_dir().join("logs")
    }
}
