// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! The export document carried inside the PNG.
//!
//! An export is a dump of the local key-value store holding the user's chat
//! customizations (bubble colors, background and character image overrides):
//!
//! ```json
//! {"version":1,"records":[{"key":"bubble:user","value":"#ff8800"}]}
//! ```
//!
//! Values are kept as raw JSON; interpreting them is up to the importer.

use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: u32 = 1;

fn default_version() -> u32 {
    EXPORT_VERSION
}

/// One key-value pair from the customization store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub key: String,
    pub value: serde_json::Value,
}

/// A versioned dump of the customization store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub records: Vec<StoredEntry>,
}

impl Default for ExportRecord {
    fn default() -> Self {
        Self {
            version: EXPORT_VERSION,
            records: Vec::new(),
        }
    }
}

impl ExportRecord {
    /// Current-version record holding `records`.
    pub fn new(records: Vec<StoredEntry>) -> Self {
        Self { records, ..Self::default() }
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.records.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Insert or overwrite `key`.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        let key = key.into();
        match self.records.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.records.push(StoredEntry { key, value }),
        }
    }

    /// Compact JSON, as embedded in the PNG.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse an export document; a missing `version` means 1.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
