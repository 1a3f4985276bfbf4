//! Unit tests for settings_watcher module.

use pagecanvas::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use std::fs;
use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path);
    assert!(watcher.is_ok());
}

#[test]
fn test_watching_a_file_that_does_not_exist_yet() {
    let dir = tempdir().unwrap();
    let watcher = SettingsWatcher::new(dir.path().join("settings.json"));
    assert!(watcher.is_ok());
}

#[test]
fn test_default_path() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("pagecanvas/settings.json"));
    }
}

/// Ignored because file system event delivery is timing-dependent and
/// platform-specific.
#[test]
#[ignore]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&settings_path)
        .unwrap();
    writeln!(file, "{{\"grid_unit\": 5}}").unwrap();
    file.sync_all().unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    let mut seen = None;
    while Instant::now() < deadline && seen.is_none() {
        seen = watcher.poll();
        std::thread::sleep(Duration::from_millis(20));
    }
    assert!(matches!(
        seen,
        Some(SettingsEvent::Modified | SettingsEvent::Created)
    ));
}
