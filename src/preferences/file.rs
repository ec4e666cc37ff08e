// ABOUTME: JSON file backed preference store with atomic replace-on-commit
// ABOUTME: Reloads when another process rewrites the file so polling readers see its commits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

use super::{PreferenceValue, PreferencesEditor, PreferencesStore};
use crate::errors::{AppError, AppResult};

struct FileState {
    values: HashMap<String, PreferenceValue>,
    /// Modification time of the file when `values` was loaded or written
    modified: Option<SystemTime>,
}

/// Preference store persisted as a JSON document
///
/// A commit serializes the full document to a sibling temporary file, syncs
/// it and renames it over the target, so the document on disk is always
/// either the old or the new version.
pub struct FilePreferences {
    path: PathBuf,
    state: RwLock<FileState>,
    generation: watch::Sender<u64>,
}

impl FilePreferences {
    /// Open the store at `path`; a missing file is an empty store
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file exists but cannot be read or parsed
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let state = load(&path).await?;
        info!(
            path = %path.display(),
            keys = state.values.len(),
            "Opened preferences file"
        );
        let (generation, _) = watch::channel(0);
        Ok(Self {
            path,
            state: RwLock::new(state),
            generation,
        })
    }

    /// Location of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload the document if another writer replaced it since we last looked
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the replaced file cannot be read or parsed
    pub async fn refresh(&self) -> AppResult<bool> {
        let on_disk = modified_time(&self.path).await?;
        if on_disk == self.state.read().await.modified {
            return Ok(false);
        }

        let reloaded = load(&self.path).await?;
        *self.state.write().await = reloaded;
        self.bump_generation();
        debug!(path = %self.path.display(), "Reloaded preferences changed by another writer");
        Ok(true)
    }

    fn bump_generation(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }

    async fn persist(&self, values: &HashMap<String, PreferenceValue>) -> AppResult<SystemTime> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let document = serde_json::to_vec_pretty(values)?;
        replace_file(&self.path, &document).await?;

        let modified = fs::metadata(&self.path).await?.modified()?;
        Ok(modified)
    }
}

#[async_trait]
impl PreferencesStore for FilePreferences {
    async fn get(&self, key: &str) -> AppResult<Option<PreferenceValue>> {
        self.refresh().await?;
        Ok(self.state.read().await.values.get(key).cloned())
    }

    async fn commit(&self, editor: PreferencesEditor) -> AppResult<()> {
        if editor.is_empty() {
            return Ok(());
        }
        let mut state = self.state.write().await;
        // Apply on top of the latest document so another writer's keys survive
        if modified_time(&self.path).await? != state.modified {
            *state = load(&self.path).await?;
        }
        let mut next = state.values.clone();
        editor.apply_to(&mut next);

        let modified = self.persist(&next).await?;
        state.values = next;
        state.modified = Some(modified);
        drop(state);

        self.bump_generation();
        debug!(path = %self.path.display(), "Preferences committed");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }
}

/// Write `contents` next to `path` and rename it into place
///
/// The temporary file is removed again when any step fails.
async fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let written = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = &written {
        warn!(
            path = %temp_path.display(),
            error = %e,
            "Discarding partial preferences file"
        );
        match fs::remove_file(&temp_path).await {
            Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => warn!(
                path = %temp_path.display(),
                error = %cleanup,
                "Could not remove partial preferences file"
            ),
            _ => {}
        }
    }
    written
}

async fn modified_time(path: &Path) -> AppResult<Option<SystemTime>> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata.modified()?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn load(path: &Path) -> AppResult<FileState> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(FileState {
                values: HashMap::new(),
                modified: None,
            });
        }
        Err(e) => return Err(e.into()),
    };
    let values = serde_json::from_slice(&bytes).map_err(|e| {
        AppError::storage(format!(
            "preferences file {} is corrupt: {e}",
            path.display()
        ))
        .with_source(e)
    })?;
    Ok(FileState {
        values,
        modified: modified_time(path).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_replace_leaves_no_temporary_file() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        // A non-empty directory at the target makes the final rename fail
        let target = dir.path().join("settings.json");
        std::fs::create_dir_all(target.join("occupied"))?;

        let result = replace_file(&target, b"{}").await;

        assert!(result.is_err());
        assert!(!dir.path().join("settings.json.tmp").exists());
        assert!(target.is_dir());
        Ok(())
    }

    #[tokio::test]
    async fn test_replace_writes_contents() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("settings.json");

        replace_file(&target, br#"{"a":1}"#).await?;

        assert_eq!(std::fs::read(&target)?, br#"{"a":1}"#);
        assert!(!dir.path().join("settings.json.tmp").exists());
        Ok(())
    }
}
