// ABOUTME: Durable key-value preference storage shared by the UI and the recording service
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one async trait with a change stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::watch;

use crate::constants::preferences::UNIT_SYSTEM_KEY;
use crate::errors::{AppError, AppResult};
use crate::models::UnitSystem;

/// A single persisted preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PreferenceValue {
    /// Signed 64-bit integer
    Long(i64),
    /// Boolean flag
    Bool(bool),
    /// Text
    Text(String),
}

impl PreferenceValue {
    const fn type_name(&self) -> &'static str {
        match self {
            Self::Long(_) => "long",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }
}

/// A batch of changes applied atomically by [`PreferencesStore::commit`]
///
/// When the batch clears the store, the clear runs before the batch's own puts
/// and removals regardless of the order they were recorded in, so
/// `put_long(k, -1).clear()` leaves `k` at `-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesEditor {
    clear: bool,
    changes: BTreeMap<String, Option<PreferenceValue>>,
}

impl PreferencesEditor {
    /// Empty batch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value
    #[must_use]
    pub fn put(mut self, key: impl Into<String>, value: PreferenceValue) -> Self {
        self.changes.insert(key.into(), Some(value));
        self
    }

    /// Set an integer value
    #[must_use]
    pub fn put_long(self, key: impl Into<String>, value: i64) -> Self {
        self.put(key, PreferenceValue::Long(value))
    }

    /// Set a boolean value
    #[must_use]
    pub fn put_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.put(key, PreferenceValue::Bool(value))
    }

    /// Set a text value
    #[must_use]
    pub fn put_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, PreferenceValue::Text(value.into()))
    }

    /// Remove a key
    #[must_use]
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.changes.insert(key.into(), None);
        self
    }

    /// Remove every key before the batch's own changes are applied
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// True when committing would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.clear && self.changes.is_empty()
    }

    /// Apply the batch to a key-value map
    pub fn apply_to(self, values: &mut HashMap<String, PreferenceValue>) {
        if self.clear {
            values.clear();
        }
        for (key, change) in self.changes {
            match change {
                Some(value) => {
                    values.insert(key, value);
                }
                None => {
                    values.remove(&key);
                }
            }
        }
    }
}

/// Durable key-value store for settings shared between execution contexts
///
/// The recording service is the only writer of the recording keys; any
/// number of readers may observe them. Readers tolerate staleness: a commit
/// racing with a read may or may not be visible to it.
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Read one value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<PreferenceValue>>;

    /// Apply a batch durably; readers see all of it or none of it
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be persisted; the store is left unchanged
    async fn commit(&self, editor: PreferencesEditor) -> AppResult<()>;

    /// Change stream carrying a generation number bumped on every commit
    fn subscribe(&self) -> watch::Receiver<u64>;

    /// Read an integer, `default` when absent
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the key holds a non-integer value
    async fn get_long(&self, key: &str, default: i64) -> AppResult<i64> {
        match self.get(key).await? {
            Some(PreferenceValue::Long(value)) => Ok(value),
            Some(other) => Err(type_mismatch(key, "long", &other)),
            None => Ok(default),
        }
    }

    /// Read a boolean, `default` when absent
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the key holds a non-boolean value
    async fn get_bool(&self, key: &str, default: bool) -> AppResult<bool> {
        match self.get(key).await? {
            Some(PreferenceValue::Bool(value)) => Ok(value),
            Some(other) => Err(type_mismatch(key, "bool", &other)),
            None => Ok(default),
        }
    }

    /// Read a text value
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the key holds a non-text value
    async fn get_text(&self, key: &str) -> AppResult<Option<String>> {
        match self.get(key).await? {
            Some(PreferenceValue::Text(value)) => Ok(Some(value)),
            Some(other) => Err(type_mismatch(key, "text", &other)),
            None => Ok(None),
        }
    }
}

fn type_mismatch(key: &str, expected: &str, found: &PreferenceValue) -> AppError {
    AppError::invalid_format(format!(
        "preference '{key}' holds a {} value, expected {expected}",
        found.type_name()
    ))
}

/// Read the persisted unit system, `fallback` when unset
///
/// # Errors
///
/// Returns `ConfigInvalid` when the stored name is not a known unit system
pub async fn unit_system(
    store: &dyn PreferencesStore,
    fallback: UnitSystem,
) -> AppResult<UnitSystem> {
    store
        .get_text(UNIT_SYSTEM_KEY)
        .await?
        .map_or(Ok(fallback), |name| name.parse())
}
