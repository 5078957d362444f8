//! Storage backends for the settings document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::location::SettingsLocation;

/// Durable storage for one serialized settings document.
pub trait SettingsBackend {
    /// Read the stored document.
    ///
    /// Returns `Ok(None)` when there is nothing to read: no file, something
    /// other than a regular file, or a file the user may not read.
    fn read(&self) -> ConfigResult<Option<Vec<u8>>>;

    /// Replace the stored document with `contents`.
    fn write(&self, contents: &[u8]) -> ConfigResult<()>;

    /// Human-readable description of where the document lives, for logs.
    fn describe(&self) -> String;
}

/// Stores the settings document as a JSON file.
///
/// Writes go to a temp file in the same directory which is then renamed
/// over the target.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend for an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend for the settings file of a resolved location.
    pub fn at(location: &SettingsLocation) -> Self {
        Self::new(location.settings_file())
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SettingsBackend for JsonFileBackend {
    fn read(&self) -> ConfigResult<Option<Vec<u8>>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotADirectory | io::ErrorKind::PermissionDenied
                ) =>
            {
                tracing::info!("{} cannot be reached: {}", self.path.display(), e);
                return Ok(None);
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };

        if !metadata.is_file() {
            tracing::info!("{} is not a regular file", self.path.display());
            return Ok(None);
        }

        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                tracing::info!("{} is not readable: {}", self.path.display(), e);
                Ok(None)
            }
            Err(e) => Err(ConfigError::Read(e)),
        }
    }

    fn write(&self, contents: &[u8]) -> ConfigResult<()> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tracing::info!("Creating directory '{}' for saving settings", parent.display());
                fs::create_dir_all(parent).map_err(|e| ConfigError::write(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| ConfigError::write(&temp_path, e))?;
            file.write_all(contents)
                .and_then(|()| file.sync_all())
                .map_err(|e| ConfigError::write(&temp_path, e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(ConfigError::write(&self.path, e));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
