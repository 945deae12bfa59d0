// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Config file lookup for the host binary.

use std::path::{Path, PathBuf};

use filepicker_core::PickerConfig;
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FILEPICKER_CONFIG";

/// Config file to read: `$FILEPICKER_CONFIG`, else `config.json` in `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => data_dir.join(CONFIG_FILE),
    }
}

/// Load the config at `path`, falling back to defaults when it is missing
/// or unreadable. A missing file is created with the defaults so there is
/// something to edit.
pub fn load_config(path: &Path) -> PickerConfig {
    if !path.exists() {
        let config = PickerConfig::default();
        match config.save(path) {
            Ok(()) => info!(path = %path.display(), "wrote default picker config"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not write default config"),
        }
        return config;
    }
    match PickerConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded picker config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config, using defaults");
            PickerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults_and_is_written() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        let config = load_config(&path);
        assert_eq!(config, PickerConfig::default());
        assert_eq!(PickerConfig::load(&path).expect("written"), PickerConfig::default());
    }

    #[test]
    fn unwritable_location_still_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join(CONFIG_FILE);
        assert_eq!(load_config(&path), PickerConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn broken_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").expect("write");
        assert_eq!(load_config(&path), PickerConfig::default());
    }

    #[test]
    fn valid_file_is_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "default_read_data": false }"#).expect("write");
        assert!(!load_config(&path).default_read_data);
    }
}
