// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Picker configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// Persistent picker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Title of the system chooser wrapping the content request.
    pub chooser_title: String,
    /// `readData` value used when the caller leaves it out.
    pub default_read_data: bool,
    /// Files larger than this are returned without inline data.
    pub max_read_bytes: Option<u64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            chooser_title: "Choose a file".into(),
            default_read_data: true,
            max_read_bytes: None,
        }
    }
}

impl PickerConfig {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.chooser_title.trim().is_empty() {
            return Err(PickerError::Config("chooser_title must not be empty".into()));
        }
        Ok(())
    }
}
