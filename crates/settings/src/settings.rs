// Host-owned option snapshot.
// Loaded and persisted by the host; read-only here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Immutable key-value snapshot of the host's option store.
///
/// Missing and empty values are equivalent to every consumer: a
/// documented default is substituted, so no lookup can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Empty snapshot; every consumer sees its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup. `None` when the key is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Lookup with a fallback for absent or empty values.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.values.get(name) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// Insert or replace a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style `set`, for hosts and tests assembling a snapshot.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Parse a snapshot from a JSON object of string values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Parse a snapshot, falling back to an empty one on bad input.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error parsing settings snapshot: {e}");
                eprintln!("Using default settings");
                Self::default()
            }
        }
    }
}

impl From<BTreeMap<String, String>> for Settings {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, String)> for Settings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
