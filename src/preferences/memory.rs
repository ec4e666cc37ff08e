// ABOUTME: In-memory preference store for tests and ephemeral sessions
// ABOUTME: Commits apply under one write lock and bump the change-stream generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{watch, RwLock};
use tracing::debug;

use super::{PreferenceValue, PreferencesEditor, PreferencesStore};
use crate::errors::AppResult;

/// Preference store that lives only as long as the process
pub struct InMemoryPreferences {
    values: RwLock<HashMap<String, PreferenceValue>>,
    generation: watch::Sender<u64>,
}

impl InMemoryPreferences {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(HashMap::new())
    }

    /// Store seeded with `values`
    #[must_use]
    pub fn with_values(values: HashMap<String, PreferenceValue>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            values: RwLock::new(values),
            generation,
        }
    }

    /// Copy of every stored value
    pub async fn snapshot(&self) -> HashMap<String, PreferenceValue> {
        self.values.read().await.clone()
    }
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferencesStore for InMemoryPreferences {
    async fn get(&self, key: &str) -> AppResult<Option<PreferenceValue>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn commit(&self, editor: PreferencesEditor) -> AppResult<()> {
        if editor.is_empty() {
            return Ok(());
        }
        editor.apply_to(&mut *self.values.write().await);
        self.generation.send_modify(|generation| *generation += 1);
        debug!(generation = *self.generation.borrow(), "Preferences committed");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commit_bumps_generation() {
        let store = InMemoryPreferences::new();
        let mut changes = store.subscribe();
        assert_eq!(*changes.borrow_and_update(), 0);

        store
            .commit(PreferencesEditor::new().put_long("k", 3))
            .await
            .ok();

        assert!(changes.has_changed().unwrap_or(false));
        assert_eq!(*changes.borrow_and_update(), 1);
        assert_eq!(store.get_long("k", -1).await.ok(), Some(3));
    }

    #[tokio::test]
    async fn test_empty_commit_is_silent() {
        let store = InMemoryPreferences::new();
        let changes = store.subscribe();
        store.commit(PreferencesEditor::new()).await.ok();
        assert!(!changes.has_changed().unwrap_or(true));
    }

    #[tokio::test]
    async fn test_type_mismatch_is_error() {
        let store = InMemoryPreferences::new();
        store
            .commit(PreferencesEditor::new().put_text("k", "five"))
            .await
            .ok();
        assert!(store.get_long("k", -1).await.is_err());
        assert_eq!(store.get_text("k").await.ok().flatten().as_deref(), Some("five"));
    }
}
