//! On-disk JSON layout of the settings.
//!
//! The document mirrors the store field for field. Decimal values are
//! written as strings so they read back exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::models::{BodySelection, Color, Frame, LookbackMultiple};

/// Root of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct SettingsDocument {
    pub last_opened_csv_filename: String,
    pub planet_selection_list: Vec<BodySelectionRecord>,
    pub custom_lookback_multiples_list: Vec<LookbackMultipleRecord>,
    pub fixed_lookback_multiples_list: Vec<LookbackMultipleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct BodySelectionRecord {
    pub body_name: String,
    pub frame: Frame,
    pub enabled: bool,
    /// Written for people reading the file; recomputed on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct LookbackMultipleRecord {
    pub name: String,
    pub multiple: Decimal,
    pub red: Decimal,
    pub green: Decimal,
    pub blue: Decimal,
    pub opacity: Decimal,
    pub enabled: bool,
}

impl SettingsDocument {
    /// Parse a settings document. Field values are validated when the
    /// records are converted into models.
    pub fn from_json(bytes: &[u8]) -> ConfigResult<Self> {
        serde_json::from_slice(bytes).map_err(ConfigError::Parse)
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> ConfigResult<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        json.push('\n');
        Ok(json)
    }
}

impl From<&BodySelection> for BodySelectionRecord {
    fn from(ps: &BodySelection) -> Self {
        Self {
            body_name: ps.body_name().to_string(),
            frame: ps.frame(),
            enabled: ps.is_enabled(),
            display_name: Some(ps.display_name()),
        }
    }
}

impl From<BodySelectionRecord> for BodySelection {
    fn from(record: BodySelectionRecord) -> Self {
        let selection = BodySelection::new(record.body_name, record.frame, record.enabled);
        if let Some(stored) = &record.display_name {
            let derived = selection.display_name();
            if *stored != derived {
                tracing::debug!(
                    "Ignoring stored display name '{}' for {}, using '{}'",
                    stored,
                    selection.body_name(),
                    derived
                );
            }
        }
        selection
    }
}

impl From<&LookbackMultiple> for LookbackMultipleRecord {
    fn from(lm: &LookbackMultiple) -> Self {
        let color = lm.color();
        Self {
            name: lm.name().to_string(),
            multiple: lm.multiple(),
            red: color.red(),
            green: color.green(),
            blue: color.blue(),
            opacity: color.opacity(),
            enabled: lm.is_enabled(),
        }
    }
}

impl TryFrom<LookbackMultipleRecord> for LookbackMultiple {
    type Error = ConfigError;

    fn try_from(record: LookbackMultipleRecord) -> ConfigResult<Self> {
        let color = Color::new(record.red, record.green, record.blue, record.opacity)?;
        LookbackMultiple::new(record.name, record.multiple, color, record.enabled)
    }
}
