// ABOUTME: Integration tests for the JSON file preference store
// ABOUTME: Validates persistence across reopen, corrupt files, clear batches and cross-handle visibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;
use tempfile::TempDir;
use tracklog::{
    constants::preferences::{RECORDING_TRACK_ID_KEY, SELECTED_TRACK_ID_KEY},
    errors::ErrorCode,
    preferences::{file::FilePreferences, PreferenceValue, PreferencesEditor, PreferencesStore},
    recording::{LocalRecordingService, TrackRecordingService},
};

#[tokio::test]
async fn test_missing_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = common::create_file_store(dir.path()).await.unwrap();

    assert_eq!(store.get(RECORDING_TRACK_ID_KEY).await.unwrap(), None);
    assert_eq!(store.get_long(RECORDING_TRACK_ID_KEY, -1).await.unwrap(), -1);
    assert!(!store.path().exists(), "reading must not create the file");
}

#[tokio::test]
async fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = common::create_file_store(dir.path()).await.unwrap();
        store
            .commit(
                PreferencesEditor::new()
                    .put_long(RECORDING_TRACK_ID_KEY, 12)
                    .put_bool("metric_units", true)
                    .put_text("last_import", "/tmp/a.gpx"),
            )
            .await
            .unwrap();
    }

    let reopened = common::create_file_store(dir.path()).await.unwrap();
    assert_eq!(reopened.get_long(RECORDING_TRACK_ID_KEY, -1).await.unwrap(), 12);
    assert!(reopened.get_bool("metric_units", false).await.unwrap());
    assert_eq!(
        reopened.get_text("last_import").await.unwrap().as_deref(),
        Some("/tmp/a.gpx")
    );
    assert!(
        !dir.path().join("settings.json.tmp").exists(),
        "temporary file is renamed away"
    );
}

#[tokio::test]
async fn test_clear_batch_is_persisted() {
    let dir = TempDir::new().unwrap();
    let store = common::create_file_store(dir.path()).await.unwrap();
    common::persist_recording_track(store.as_ref(), 4).await.unwrap();
    store
        .commit(PreferencesEditor::new().put_text("other", "x"))
        .await
        .unwrap();

    let monitor = common::create_monitor(store);
    monitor.clear_selected_and_recording_tracks().await.unwrap();

    let reopened = FilePreferences::open(dir.path().join("settings.json"))
        .await
        .unwrap();
    assert_eq!(
        reopened.get(RECORDING_TRACK_ID_KEY).await.unwrap(),
        Some(PreferenceValue::Long(-1))
    );
    assert_eq!(
        reopened.get(SELECTED_TRACK_ID_KEY).await.unwrap(),
        Some(PreferenceValue::Long(-1))
    );
    assert_eq!(reopened.get("other").await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let Err(error) = FilePreferences::open(&path).await else {
        panic!("corrupt file must not open");
    };
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let store = FilePreferences::open(&path).await.unwrap();
    store
        .commit(PreferencesEditor::new().put_long(SELECTED_TRACK_ID_KEY, 2))
        .await
        .unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_polling_reader_sees_other_handle_commit() {
    let dir = TempDir::new().unwrap();
    let reader = common::create_file_store(dir.path()).await.unwrap();
    let writer = common::create_file_store(dir.path()).await.unwrap();
    let monitor = common::create_monitor(reader.clone());
    assert!(!monitor.is_recording().await.unwrap());

    let service = LocalRecordingService::new(writer);
    let start = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        service.start_new_track().await
    };
    let (started, observed) = tokio::join!(
        start,
        monitor.await_recording_status(Duration::from_secs(5), true)
    );

    assert_eq!(observed.unwrap(), started.unwrap());
    assert_eq!(
        reader.get_long(SELECTED_TRACK_ID_KEY, -1).await.unwrap(),
        1,
        "reloaded document carries every key"
    );
}
