//! Key/value configuration store.
//!
//! Entries are addressed by `(section, key)` and hold plain strings. A store
//! distinguishes **bound** entries (requested at least once through
//! [`ConfigStore::get_or_create`]) from **orphaned** ones (present in the
//! source text but never requested). Both kinds are reported by
//! [`ConfigStore::all_entries`], bound first.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("section `{section}` must be a table")]
    NotATable { section: String },

    #[error("value of `{section}.{key}` must be a string")]
    NotAString { section: String, key: String },
}

/// Address of a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigKey {
    pub section: String,
    pub key: String,
}

impl ConfigKey {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

/// A single configuration value with its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(section: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: ConfigKey::new(section, key),
            value: value.into(),
        }
    }
}

/// Source of configuration entries.
pub trait ConfigStore {
    /// Return the stored value for `(section, key)`, binding `default` first
    /// when the entry does not exist yet.
    fn get_or_create(&mut self, section: &str, key: &str, default: &str) -> String;

    /// Every entry, bound ones first, then orphaned ones, each in insertion
    /// order.
    fn all_entries(&self) -> Vec<ConfigEntry>;
}

/// Configuration store backed by TOML text.
///
/// Each section is a TOML table whose values are strings:
///
/// ```toml
/// [Mining]
/// activeOn = "ore, wall"
/// priorityList = "IronMiningPick, WoodMiningPick"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlConfigStore {
    bound: Vec<ConfigEntry>,
    orphaned: Vec<ConfigEntry>,
}

impl TomlConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text. Every entry starts out orphaned.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text.parse()?;
        let mut store = Self::new();

        for (section, value) in table {
            let toml::Value::Table(fields) = value else {
                return Err(ConfigError::NotATable { section });
            };
            for (key, value) in fields {
                let toml::Value::String(value) = value else {
                    return Err(ConfigError::NotAString { section, key });
                };
                store.orphaned.push(ConfigEntry::new(section.clone(), key, value));
            }
        }

        Ok(store)
    }

    /// Render every entry back to TOML, grouped by section in first-seen order.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut table = toml::Table::new();

        for entry in self.bound.iter().chain(&self.orphaned) {
            let section = table
                .entry(entry.key.section.clone())
                .or_insert_with(|| toml::Value::Table(toml::Table::new()));
            if let toml::Value::Table(fields) = section {
                fields
                    .entry(entry.key.key.clone())
                    .or_insert_with(|| toml::Value::String(entry.value.clone()));
            }
        }

        Ok(toml::to_string(&table)?)
    }

    /// Set a value, overwriting any existing entry at the same address.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = Self::find_mut(&mut self.bound, section, key) {
            entry.value = value;
        } else if let Some(entry) = Self::find_mut(&mut self.orphaned, section, key) {
            entry.value = value;
        } else {
            self.orphaned.push(ConfigEntry::new(section, key, value));
        }
    }

    /// Look up a value without binding it.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.bound
            .iter()
            .chain(&self.orphaned)
            .find(|e| e.key.section == section && e.key.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn bound_entries(&self) -> &[ConfigEntry] {
        &self.bound
    }

    pub fn orphaned_entries(&self) -> &[ConfigEntry] {
        &self.orphaned
    }

    fn find_mut<'a>(
        entries: &'a mut [ConfigEntry],
        section: &str,
        key: &str,
    ) -> Option<&'a mut ConfigEntry> {
        entries
            .iter_mut()
            .find(|e| e.key.section == section && e.key.key == key)
    }
}

impl ConfigStore for TomlConfigStore {
    fn get_or_create(&mut self, section: &str, key: &str, default: &str) -> String {
        if let Some(entry) = Self::find_mut(&mut self.bound, section, key) {
            return entry.value.clone();
        }

        if let Some(pos) = self
            .orphaned
            .iter()
            .position(|e| e.key.section == section && e.key.key == key)
        {
            let entry = self.orphaned.remove(pos);
            let value = entry.value.clone();
            self.bound.push(entry);
            return value;
        }

        debug!(section, key, "binding default configuration value");
        self.bound.push(ConfigEntry::new(section, key, default));
        default.to_string()
    }

    fn all_entries(&self) -> Vec<ConfigEntry> {
        self.bound.iter().chain(&self.orphaned).cloned().collect()
    }
}
