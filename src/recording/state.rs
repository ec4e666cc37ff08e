// ABOUTME: UI-side view of the recording state, reconciling the live service with persisted flags
// ABOUTME: Provides polling and change-stream waits for a recording state transition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recording-state queries
//!
//! Two sources answer "is a track being recorded": the bound recording
//! service, when there is one, and the `recording_track_id` preference,
//! where `-1` means idle. The live service wins; the preference is the
//! fallback when the service is unbound or its call fails.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use super::connection::RecordingServiceConnection;
use crate::config::environment::TracklogConfig;
use crate::constants::preferences::{
    INVALID_TRACK_ID, RECORDING_TRACK_ID_KEY, SELECTED_TRACK_ID_KEY,
};
use crate::constants::recording::DEFAULT_POLL_INTERVAL_MS;
use crate::errors::{AppError, AppResult};
use crate::models::UnitSystem;
use crate::preferences::{self, PreferencesEditor, PreferencesStore};
use crate::scheduler::IdleWaiter;

/// Reads and waits on the recording state
pub struct RecordingStateMonitor {
    store: Arc<dyn PreferencesStore>,
    connection: Option<RecordingServiceConnection>,
    idle: Option<Arc<dyn IdleWaiter>>,
    poll_interval: Duration,
}

impl RecordingStateMonitor {
    /// Monitor that only consults the preference store
    #[must_use]
    pub fn new(store: Arc<dyn PreferencesStore>) -> Self {
        Self {
            store,
            connection: None,
            idle: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Monitor using the configured poll interval
    #[must_use]
    pub fn from_config(store: Arc<dyn PreferencesStore>, config: &TracklogConfig) -> Self {
        Self::new(store).with_poll_interval(config.poll_interval)
    }

    /// Prefer the live service behind `connection` whenever it is bound
    #[must_use]
    pub fn with_connection(mut self, connection: RecordingServiceConnection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Drain `idle` before reporting an observed transition
    #[must_use]
    pub fn with_idle_waiter(mut self, idle: Arc<dyn IdleWaiter>) -> Self {
        self.idle = Some(idle);
        self
    }

    /// Interval between polls in [`Self::await_recording_status`]
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Persisted id of the track being recorded, `-1` when none
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn recording_track_id(&self) -> AppResult<i64> {
        self.store
            .get_long(RECORDING_TRACK_ID_KEY, INVALID_TRACK_ID)
            .await
    }

    /// Persisted id of the track shown in the UI, `-1` when none
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn selected_track_id(&self) -> AppResult<i64> {
        self.store
            .get_long(SELECTED_TRACK_ID_KEY, INVALID_TRACK_ID)
            .await
    }

    /// Whether a track is being recorded
    ///
    /// # Errors
    ///
    /// Returns an error only if the fallback store read fails
    pub async fn is_recording(&self) -> AppResult<bool> {
        if let Some(connection) = &self.connection {
            if let Some(service) = connection.service_if_bound().await {
                match service.is_recording().await {
                    Ok(recording) => return Ok(recording),
                    Err(e) => {
                        warn!(error = %e, "Recording service query failed, using persisted state");
                    }
                }
            }
        }
        Ok(self.recording_track_id().await? != INVALID_TRACK_ID)
    }

    /// Poll until the recording state equals `recording`, then return the
    /// persisted recording track id
    ///
    /// Once the state is observed the idle barrier, if any, is drained and the
    /// state checked again; a flip during the drain resumes polling.
    ///
    /// # Errors
    ///
    /// Returns a `Timeout` error if the state is not reached within `timeout`
    pub async fn await_recording_status(
        &self,
        timeout: Duration,
        recording: bool,
    ) -> AppResult<i64> {
        let started = Instant::now();
        loop {
            while self.is_recording().await? != recording {
                let elapsed = started.elapsed();
                if elapsed >= timeout {
                    return Err(status_timeout(recording, elapsed, timeout));
                }
                time::sleep(self.poll_interval.min(timeout - elapsed)).await;
            }

            self.drain_idle(started, timeout, recording).await?;
            if self.is_recording().await? == recording {
                let track_id = self.recording_track_id().await?;
                info!(
                    recording,
                    track_id,
                    elapsed_ms = started.elapsed().as_millis(),
                    "Recording status reached"
                );
                return Ok(track_id);
            }
            debug!(recording, "Recording status flipped while draining, polling again");
        }
    }

    /// Same contract as [`Self::await_recording_status`], woken by store
    /// commits instead of a timer
    ///
    /// Only commits made through this process's store handle wake the wait.
    ///
    /// # Errors
    ///
    /// Returns a `Timeout` error if the state is not reached within `timeout`,
    /// or `ResourceUnavailable` if the store goes away
    pub async fn wait_for_recording_status(
        &self,
        timeout: Duration,
        recording: bool,
    ) -> AppResult<i64> {
        let started = Instant::now();
        let mut changes = self.store.subscribe();

        let wait = async {
            loop {
                changes.borrow_and_update();
                if self.is_recording().await? == recording {
                    self.drain_idle(started, timeout, recording).await?;
                    if self.is_recording().await? == recording {
                        return self.recording_track_id().await;
                    }
                    continue;
                }
                changes
                    .changed()
                    .await
                    .map_err(|_| AppError::unavailable("preference store closed"))?;
            }
        };

        match time::timeout(timeout, wait).await {
            Ok(result) => {
                if let Ok(track_id) = &result {
                    info!(recording, track_id, "Recording status reached");
                }
                result
            }
            Err(_) => Err(status_timeout(recording, started.elapsed(), timeout)),
        }
    }

    /// Reset both track ids to `-1` and wipe every other preference, durably
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the reset
    pub async fn clear_selected_and_recording_tracks(&self) -> AppResult<()> {
        self.store
            .commit(
                PreferencesEditor::new()
                    .put_long(SELECTED_TRACK_ID_KEY, INVALID_TRACK_ID)
                    .put_long(RECORDING_TRACK_ID_KEY, INVALID_TRACK_ID)
                    .clear(),
            )
            .await?;
        info!("Cleared selected and recording tracks");
        Ok(())
    }

    /// Persisted display unit system, `fallback` when unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the stored value is not a unit system
    pub async fn unit_system(&self, fallback: UnitSystem) -> AppResult<UnitSystem> {
        preferences::unit_system(self.store.as_ref(), fallback).await
    }

    async fn drain_idle(
        &self,
        started: Instant,
        timeout: Duration,
        recording: bool,
    ) -> AppResult<()> {
        let Some(idle) = &self.idle else {
            return Ok(());
        };
        let remaining = timeout.saturating_sub(started.elapsed());
        time::timeout(remaining, idle.wait_for_idle())
            .await
            .map_err(|_| status_timeout(recording, started.elapsed(), timeout))?
    }
}

fn status_timeout(recording: bool, elapsed: Duration, timeout: Duration) -> AppError {
    let state = if recording { "recording" } else { "idle" };
    warn!(
        expected = state,
        elapsed_ms = elapsed.as_millis(),
        timeout_ms = timeout.as_millis(),
        "Recording status did not change in time"
    );
    AppError::timeout(
        format!("recording state did not become {state}"),
        elapsed.as_millis(),
        timeout.as_millis(),
    )
}
