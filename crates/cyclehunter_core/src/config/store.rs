//! The settings store: selections, multiples and the last opened file.

use super::backend::{JsonFileBackend, SettingsBackend};
use super::document::{BodySelectionRecord, LookbackMultipleRecord, SettingsDocument};
use super::error::{ConfigError, ConfigResult};
use super::location::SettingsLocation;
use crate::catalog::{CatalogRevision, DefaultCatalog};
use crate::models::{BodySelection, LookbackMultiple};

/// How the store was populated by [`SettingsStore::load`].
#[derive(Debug)]
pub enum LoadStatus {
    /// Settings were read from the backend.
    Loaded,
    /// No saved settings existed; defaults are in use.
    Missing,
    /// Saved settings existed but could not be read; defaults are in use
    /// and the next save overwrites the stored document.
    Corrupt(ConfigError),
}

impl LoadStatus {
    /// True when the store holds the default catalog.
    pub fn used_defaults(&self) -> bool {
        !matches!(self, LoadStatus::Loaded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Catalogs {
    last_opened_file_path: String,
    body_selections: Vec<BodySelection>,
    custom_multiples: Vec<LookbackMultiple>,
    fixed_multiples: Vec<LookbackMultiple>,
}

impl Catalogs {
    fn defaults(revision: CatalogRevision) -> Self {
        let catalog = DefaultCatalog::generate(revision);
        Self {
            last_opened_file_path: String::new(),
            body_selections: catalog.body_selections,
            custom_multiples: catalog.custom_multiples,
            fixed_multiples: catalog.fixed_multiples,
        }
    }

    /// Empty lists load as saved; `initialize_with_defaults` restores them.
    fn from_document(document: SettingsDocument) -> ConfigResult<Self> {
        Ok(Self {
            last_opened_file_path: document.last_opened_csv_filename,
            body_selections: document
                .planet_selection_list
                .into_iter()
                .map(BodySelection::from)
                .collect(),
            custom_multiples: records_to_multiples(document.custom_lookback_multiples_list)?,
            fixed_multiples: records_to_multiples(document.fixed_lookback_multiples_list)?,
        })
    }

    fn to_document(&self) -> SettingsDocument {
        SettingsDocument {
            last_opened_csv_filename: self.last_opened_file_path.clone(),
            planet_selection_list: self
                .body_selections
                .iter()
                .map(BodySelectionRecord::from)
                .collect(),
            custom_lookback_multiples_list: multiples_to_records(&self.custom_multiples),
            fixed_lookback_multiples_list: multiples_to_records(&self.fixed_multiples),
        }
    }
}

fn multiples_to_records(multiples: &[LookbackMultiple]) -> Vec<LookbackMultipleRecord> {
    multiples.iter().map(LookbackMultipleRecord::from).collect()
}

fn records_to_multiples(
    records: Vec<LookbackMultipleRecord>,
) -> ConfigResult<Vec<LookbackMultiple>> {
    records.into_iter().map(LookbackMultiple::try_from).collect()
}

/// Application settings: which bodies and lookback multiples are enabled,
/// and which data file was opened last.
///
/// A store starts uninitialized and becomes initialized through
/// [`load`](Self::load) or [`initialize_with_defaults`](Self::initialize_with_defaults).
/// It never returns to the uninitialized state. Every other operation on an
/// uninitialized store is a programming error and panics.
#[derive(Debug)]
pub struct SettingsStore<B: SettingsBackend = JsonFileBackend> {
    backend: B,
    revision: CatalogRevision,
    /// `None` until initialized.
    catalogs: Option<Catalogs>,
}

impl SettingsStore<JsonFileBackend> {
    /// Load from the settings file in the user's home directory.
    pub fn load_from_home(revision: CatalogRevision) -> (Self, LoadStatus) {
        let location = SettingsLocation::from_env();
        Self::load(JsonFileBackend::at(&location), revision)
    }
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Create an uninitialized store.
    pub fn new(backend: B, revision: CatalogRevision) -> Self {
        Self {
            backend,
            revision,
            catalogs: None,
        }
    }

    /// Load settings from `backend`, falling back to the default catalog.
    ///
    /// A missing document is not an error. A document that cannot be read
    /// or parsed is reported through [`LoadStatus::Corrupt`]. In both cases
    /// the returned store holds the defaults of `revision`.
    pub fn load(backend: B, revision: CatalogRevision) -> (Self, LoadStatus) {
        let mut store = Self::new(backend, revision);
        let location = store.backend.describe();

        let status = match store.backend.read() {
            Ok(Some(bytes)) => {
                tracing::info!("Attempting to load settings from file '{}' ...", location);
                match SettingsDocument::from_json(&bytes).and_then(Catalogs::from_document) {
                    Ok(catalogs) => {
                        store.catalogs = Some(catalogs);
                        tracing::info!("Settings loaded.");
                        LoadStatus::Loaded
                    }
                    Err(e) => {
                        tracing::error!("Failed to load settings from '{}': {}", location, e);
                        tracing::info!("Continuing on with default settings.");
                        LoadStatus::Corrupt(e)
                    }
                }
            }
            Ok(None) => {
                tracing::info!(
                    "No previous settings file found at '{}', initializing with default values.",
                    location
                );
                LoadStatus::Missing
            }
            Err(e) => {
                tracing::error!("Failed to read settings from '{}': {}", location, e);
                tracing::info!("Continuing on with default settings.");
                LoadStatus::Corrupt(e)
            }
        };

        if store.catalogs.is_none() {
            store.initialize_with_defaults();
        }
        (store, status)
    }

    /// Replace all state with the default catalog of this store's revision.
    pub fn initialize_with_defaults(&mut self) {
        self.catalogs = Some(Catalogs::defaults(self.revision));
    }

    pub fn is_initialized(&self) -> bool {
        self.catalogs.is_some()
    }

    /// Revision used whenever defaults are generated.
    pub fn revision(&self) -> CatalogRevision {
        self.revision
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize the full state and write it to the backend.
    ///
    /// Unchanged state always produces identical bytes. On failure the
    /// in-memory state is untouched and the error is returned.
    pub fn save(&self) -> ConfigResult<()> {
        let json = self.to_json()?;
        let location = self.backend.describe();
        tracing::debug!("Attempting to save settings to file '{}' ...", location);

        match self.backend.write(json.as_bytes()) {
            Ok(()) => {
                tracing::info!("Wrote settings to file: {}", location);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to write settings to '{}': {}", location, e);
                Err(e)
            }
        }
    }

    /// The document [`save`](Self::save) would write.
    pub fn to_json(&self) -> ConfigResult<String> {
        self.catalogs("to_json").to_document().to_json()
    }

    pub fn last_opened_file_path(&self) -> &str {
        &self.catalogs("last_opened_file_path").last_opened_file_path
    }

    /// Remember the last opened data file. The path is not checked.
    pub fn set_last_opened_file_path(&mut self, path: impl Into<String>) {
        self.catalogs_mut("set_last_opened_file_path").last_opened_file_path = path.into();
    }

    pub fn body_selections(&self) -> &[BodySelection] {
        &self.catalogs("body_selections").body_selections
    }

    pub fn body_selections_mut(&mut self) -> &mut [BodySelection] {
        &mut self.catalogs_mut("body_selections_mut").body_selections
    }

    pub fn custom_multiples(&self) -> &[LookbackMultiple] {
        &self.catalogs("custom_multiples").custom_multiples
    }

    pub fn custom_multiples_mut(&mut self) -> &mut [LookbackMultiple] {
        &mut self.catalogs_mut("custom_multiples_mut").custom_multiples
    }

    pub fn fixed_multiples(&self) -> &[LookbackMultiple] {
        &self.catalogs("fixed_multiples").fixed_multiples
    }

    pub fn fixed_multiples_mut(&mut self) -> &mut [LookbackMultiple] {
        &mut self.catalogs_mut("fixed_multiples_mut").fixed_multiples
    }

    /// Enabled body selections, in catalog order.
    pub fn enabled_body_selections(&self) -> Vec<&BodySelection> {
        self.catalogs("enabled_body_selections")
            .body_selections
            .iter()
            .filter(|ps| ps.is_enabled())
            .collect()
    }

    /// Enabled custom multiples, in catalog order.
    pub fn enabled_custom_multiples(&self) -> Vec<&LookbackMultiple> {
        enabled(&self.catalogs("enabled_custom_multiples").custom_multiples)
    }

    /// Enabled fixed multiples, in catalog order.
    pub fn enabled_fixed_multiples(&self) -> Vec<&LookbackMultiple> {
        enabled(&self.catalogs("enabled_fixed_multiples").fixed_multiples)
    }

    /// Toggle the body with the given display name (e.g. "G.Sun").
    ///
    /// Returns false if no body has that display name.
    pub fn set_body_enabled(&mut self, display_name: &str, enabled: bool) -> bool {
        let bodies = &mut self.catalogs_mut("set_body_enabled").body_selections;
        match bodies.iter_mut().find(|ps| ps.display_name() == display_name) {
            Some(ps) => {
                ps.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Toggle the first custom multiple with the given name.
    ///
    /// Returns false if no custom multiple has that name.
    pub fn set_custom_multiple_enabled(&mut self, name: &str, enabled: bool) -> bool {
        set_enabled_by_name(
            &mut self.catalogs_mut("set_custom_multiple_enabled").custom_multiples,
            name,
            enabled,
        )
    }

    /// Toggle the first fixed multiple with the given name.
    ///
    /// Returns false if no fixed multiple has that name.
    pub fn set_fixed_multiple_enabled(&mut self, name: &str, enabled: bool) -> bool {
        set_enabled_by_name(
            &mut self.catalogs_mut("set_fixed_multiple_enabled").fixed_multiples,
            name,
            enabled,
        )
    }

    fn catalogs(&self, operation: &str) -> &Catalogs {
        match &self.catalogs {
            Some(catalogs) => catalogs,
            None => panic!("SettingsStore::{} called before the store was initialized", operation),
        }
    }

    fn catalogs_mut(&mut self, operation: &str) -> &mut Catalogs {
        match &mut self.catalogs {
            Some(catalogs) => catalogs,
            None => panic!("SettingsStore::{} called before the store was initialized", operation),
        }
    }
}

fn enabled(multiples: &[LookbackMultiple]) -> Vec<&LookbackMultiple> {
    multiples.iter().filter(|lm| lm.is_enabled()).collect()
}

fn set_enabled_by_name(multiples: &mut [LookbackMultiple], name: &str, enabled: bool) -> bool {
    match multiples.iter_mut().find(|lm| lm.name() == name) {
        Some(lm) => {
            lm.set_enabled(enabled);
            true
        }
        None => false,
    }
}
