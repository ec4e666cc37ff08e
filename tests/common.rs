// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, preference store fixtures and fast recording-state monitors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `tracklog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;
use tracklog::{
    constants::preferences::{RECORDING_TRACK_ID_KEY, SELECTED_TRACK_ID_KEY},
    preferences::{
        file::FilePreferences, memory::InMemoryPreferences, PreferencesEditor, PreferencesStore,
    },
    recording::RecordingStateMonitor,
};

static INIT_LOGGER: Once = Once::new();

/// Poll interval used by test monitors
pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Empty in-memory store
pub fn create_memory_store() -> Arc<InMemoryPreferences> {
    init_test_logging();
    Arc::new(InMemoryPreferences::new())
}

/// File store at `dir/settings.json`
pub async fn create_file_store(dir: &Path) -> Result<Arc<FilePreferences>> {
    init_test_logging();
    Ok(Arc::new(
        FilePreferences::open(dir.join("settings.json")).await?,
    ))
}

/// Monitor over `store` that polls every [`TEST_POLL_INTERVAL`]
pub fn create_monitor(store: Arc<dyn PreferencesStore>) -> RecordingStateMonitor {
    RecordingStateMonitor::new(store).with_poll_interval(TEST_POLL_INTERVAL)
}

/// Persist a recording track id the way the recording service does
pub async fn persist_recording_track(store: &dyn PreferencesStore, track_id: i64) -> Result<()> {
    store
        .commit(
            PreferencesEditor::new()
                .put_long(RECORDING_TRACK_ID_KEY, track_id)
                .put_long(SELECTED_TRACK_ID_KEY, track_id),
        )
        .await?;
    Ok(())
}
