// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Filesystem store against a temp dir.

use comboviz_app_core::config::{ConfigError, ConfigService, ConfigStore};
use comboviz_app_core::config_port::PrefsPort;
use comboviz_app_core::prefs::{ComboPrefs, PREFS_KEY};
use comboviz_app_core::{Mode, Selection};
use comboviz_config_fs::FsConfigStore;

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
}

#[test]
fn creates_nested_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::at(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.base(), nested.as_path());
}

#[test]
fn prefs_land_in_key_named_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let svc = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    let sel = Selection::new(9, 4, Mode::Permutation);
    svc.save_prefs(&ComboPrefs::from(&sel)).unwrap();

    let path = svc.store().path_for(PREFS_KEY);
    assert_eq!(path, dir.path().join("comboviz_prefs.json"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"permutation\""));

    // a fresh store over the same dir sees the same prefs
    let again = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    assert_eq!(again.load_prefs().unwrap().to_selection(), sel);
}
