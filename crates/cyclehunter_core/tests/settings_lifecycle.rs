//! Full session lifecycle through the public API: load, toggle, save, reload.

use std::fs;

use cyclehunter_core::catalog::{CatalogRevision, DefaultCatalog};
use cyclehunter_core::config::{JsonFileBackend, LoadStatus, SettingsLocation, SettingsStore};
use cyclehunter_core::ephemeris::{body_id_for_name, UNKNOWN_BODY_ID};
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn enabled_selections_survive_restart() {
    let home = tempdir().unwrap();
    let location = SettingsLocation::resolve(Some(home.path().to_path_buf()));

    let (mut store, status) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::default());
    assert!(matches!(status, LoadStatus::Missing));

    assert!(store.set_body_enabled("G.Sun", true));
    assert!(store.set_custom_multiple_enabled("5", true));
    store.save().unwrap();
    assert!(location.settings_file().is_file());

    let (reloaded, status) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::default());
    assert!(matches!(status, LoadStatus::Loaded));

    let bodies = reloaded.enabled_body_selections();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].display_name(), "G.Sun");

    let multiples = reloaded.enabled_custom_multiples();
    assert_eq!(multiples.len(), 1);
    assert_eq!(multiples[0].multiple(), Decimal::from(5));
    assert!(reloaded.enabled_fixed_multiples().is_empty());
}

#[test]
fn corrupt_file_is_replaced_on_next_save() {
    let home = tempdir().unwrap();
    let location = SettingsLocation::resolve(Some(home.path().to_path_buf()));
    fs::create_dir_all(location.settings_dir()).unwrap();
    fs::write(location.settings_file(), "not json at all").unwrap();

    let (store, status) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::default());
    assert!(matches!(status, LoadStatus::Corrupt(_)));
    assert!(status.used_defaults());

    let defaults = DefaultCatalog::generate(CatalogRevision::default());
    assert_eq!(store.custom_multiples(), defaults.custom_multiples.as_slice());

    store.save().unwrap();
    let (_, status) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::default());
    assert!(matches!(status, LoadStatus::Loaded));
}

#[test]
fn saved_document_is_stable_across_reload() {
    let home = tempdir().unwrap();
    let location = SettingsLocation::resolve(Some(home.path().to_path_buf()));

    let (mut store, _) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::Extended);
    store.set_last_opened_file_path("/data/gold.csv");
    store.set_fixed_multiple_enabled("sqrt( (1^2) + (phi^2) )", true);
    for ps in store.body_selections_mut().iter_mut().step_by(3) {
        ps.set_enabled(true);
    }
    store.save().unwrap();
    let first = fs::read(location.settings_file()).unwrap();

    let (reloaded, _) =
        SettingsStore::load(JsonFileBackend::at(&location), CatalogRevision::Simplified);
    reloaded.save().unwrap();
    let second = fs::read(location.settings_file()).unwrap();

    assert_eq!(first, second);
    // Saved state wins over the revision's defaults.
    assert_eq!(reloaded.custom_multiples(), store.custom_multiples());
}

#[test]
fn default_bodies_map_to_ephemeris_ids() {
    let catalog = DefaultCatalog::generate(CatalogRevision::default());
    for ps in &catalog.body_selections {
        let id = body_id_for_name(ps.body_name());
        match ps.body_name() {
            "Ascendant" | "CalendarDay" => assert_eq!(id, UNKNOWN_BODY_ID),
            name => assert_ne!(id, UNKNOWN_BODY_ID, "{} has no ephemeris id", name),
        }
    }
}
