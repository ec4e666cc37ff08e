// ABOUTME: Recording state commands for the tracklog CLI
// ABOUTME: Handles status, start, stop, clear and await against the preferences file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracklog::{
    config::environment::TracklogConfig,
    errors::AppResult,
    preferences::file::FilePreferences,
    recording::{LocalRecordingService, RecordingStateMonitor, TrackRecordingService},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_status, display_track_id};

async fn open_store(config: &TracklogConfig) -> Result<Arc<FilePreferences>> {
    Ok(Arc::new(
        FilePreferences::open(&config.preferences_path).await?,
    ))
}

/// Print the persisted recording state
pub async fn status(config: &TracklogConfig) -> Result<()> {
    let monitor = RecordingStateMonitor::from_config(open_store(config).await?, config);
    let recording = monitor.is_recording().await?;
    let recording_track_id = monitor.recording_track_id().await?;
    let selected_track_id = monitor.selected_track_id().await?;
    let unit_system = monitor.unit_system(config.unit_system).await?;

    display_status(recording, recording_track_id, selected_track_id, unit_system);
    Ok(())
}

/// Start a new track and print its id
pub async fn start(config: &TracklogConfig) -> Result<()> {
    let service = LocalRecordingService::restore(open_store(config).await?).await?;
    let track_id = service.start_new_track().await?;
    display_track_id(track_id);
    Ok(())
}

/// Stop the current track
pub async fn stop(config: &TracklogConfig) -> Result<()> {
    let service = LocalRecordingService::restore(open_store(config).await?).await?;
    let track_id = service.recording_track_id().await?;
    service.end_current_track().await?;
    display_track_id(track_id);
    Ok(())
}

/// Reset both track ids and wipe all preferences
pub async fn clear(config: &TracklogConfig) -> Result<()> {
    let monitor = RecordingStateMonitor::from_config(open_store(config).await?, config);
    monitor.clear_selected_and_recording_tracks().await?;
    display_track_id(monitor.recording_track_id().await?);
    Ok(())
}

/// Block until the recording state matches, then print the recording track id
pub async fn await_status(
    config: &TracklogConfig,
    recording: bool,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let timeout = timeout_ms.map_or(config.await_timeout, Duration::from_millis);
    info!(
        recording,
        timeout_ms = timeout.as_millis(),
        "Waiting for recording status"
    );

    // Another process writes the file, so poll rather than wait on commits
    let monitor = RecordingStateMonitor::from_config(open_store(config).await?, config);
    let track_id = monitor.await_recording_status(timeout, recording).await?;
    display_track_id(track_id);
    Ok(())
}
