// ABOUTME: Track recording service contract and the in-process recorder implementation
// ABOUTME: The recorder is the single writer of the persisted recording track id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::constants::preferences::{
    INVALID_TRACK_ID, RECORDING_TRACK_ID_KEY, SELECTED_TRACK_ID_KEY,
};
use crate::errors::{AppError, AppResult};
use crate::models::{TrackPoint, TrackStatistics, WaypointCreationRequest, WaypointType};
use crate::preferences::{PreferencesEditor, PreferencesStore};

/// Live interface of the background component that records tracks
#[async_trait]
pub trait TrackRecordingService: Send + Sync {
    /// Authoritative recording state
    async fn is_recording(&self) -> AppResult<bool>;

    /// Id of the track being recorded, `-1` when idle
    async fn recording_track_id(&self) -> AppResult<i64>;

    /// Begin a new track and return its id
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if a track is already being recorded
    async fn start_new_track(&self) -> AppResult<i64>;

    /// Finish the current track
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing is being recorded
    async fn end_current_track(&self) -> AppResult<()>;

    /// Create a marker at the latest location and return its id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing is being recorded
    async fn insert_waypoint(&self, request: WaypointCreationRequest) -> AppResult<i64>;

    /// Feed a location fix into the current track
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing is being recorded
    async fn record_location(&self, point: TrackPoint) -> AppResult<()>;

    /// Statistics of the whole current track
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing is being recorded
    async fn current_statistics(&self) -> AppResult<TrackStatistics>;
}

/// A marker stored by the recorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique marker id
    pub id: i64,
    /// Track the marker belongs to
    pub track_id: i64,
    /// Request the marker was created from, with a generated name filled in
    pub request: WaypointCreationRequest,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Latest fix at creation time, if any
    pub location: Option<TrackPoint>,
    /// Statistics snapshot for statistics markers
    pub statistics: Option<TrackStatistics>,
}

#[derive(Debug, Default)]
struct RecorderState {
    track_id: Option<i64>,
    next_track_id: i64,
    next_waypoint_id: i64,
    track_statistics: TrackStatistics,
    segment_statistics: TrackStatistics,
    last_location: Option<TrackPoint>,
    /// Markers of the current or most recently recorded track
    waypoints: Vec<Waypoint>,
}

impl RecorderState {
    fn active_track(&self, operation: &str) -> AppResult<i64> {
        self.track_id
            .ok_or_else(|| AppError::invalid_input(format!("cannot {operation}: not recording")))
    }

    fn push_waypoint(&mut self, track_id: i64, mut request: WaypointCreationRequest) -> i64 {
        let id = self.next_waypoint_id;
        self.next_waypoint_id += 1;

        let statistics = match request.waypoint_type {
            WaypointType::Statistics if request.is_track_statistics => {
                Some(self.track_statistics.clone())
            }
            WaypointType::Statistics => {
                Some(std::mem::take(&mut self.segment_statistics))
            }
            WaypointType::Waypoint => None,
        };
        if request.name.is_none() && request.waypoint_type == WaypointType::Waypoint {
            let markers = self
                .waypoints
                .iter()
                .filter(|w| w.track_id == track_id && !w.request.is_statistics())
                .count();
            request.name = Some(format!("Marker {}", markers + 1));
        }

        self.waypoints.push(Waypoint {
            id,
            track_id,
            request,
            created_at: Utc::now(),
            location: self.last_location.clone(),
            statistics,
        });
        id
    }
}

/// In-process recorder backed by a preference store
pub struct LocalRecordingService {
    store: Arc<dyn PreferencesStore>,
    state: Mutex<RecorderState>,
}

impl LocalRecordingService {
    /// Idle recorder whose first track gets id 1
    #[must_use]
    pub fn new(store: Arc<dyn PreferencesStore>) -> Self {
        Self {
            store,
            state: Mutex::new(RecorderState {
                next_track_id: 1,
                next_waypoint_id: 1,
                ..RecorderState::default()
            }),
        }
    }

    /// Recorder that resumes whatever the store says is being recorded
    ///
    /// Track ids continue after the highest id found in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn restore(store: Arc<dyn PreferencesStore>) -> AppResult<Self> {
        let recording = store
            .get_long(RECORDING_TRACK_ID_KEY, INVALID_TRACK_ID)
            .await?;
        let selected = store
            .get_long(SELECTED_TRACK_ID_KEY, INVALID_TRACK_ID)
            .await?;

        let service = Self::new(store);
        {
            let mut state = service.state.lock().await;
            state.next_track_id = recording.max(selected).max(0) + 1;
            if recording != INVALID_TRACK_ID {
                state.track_id = Some(recording);
                info!(track_id = recording, "Resumed recording from stored state");
            }
        }
        Ok(service)
    }

    /// Markers recorded for `track_id`, in creation order
    ///
    /// Only the current or most recently recorded track keeps its markers;
    /// starting a new track drops the previous one's.
    pub async fn waypoints(&self, track_id: i64) -> Vec<Waypoint> {
        self.state
            .lock()
            .await
            .waypoints
            .iter()
            .filter(|w| w.track_id == track_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TrackRecordingService for LocalRecordingService {
    async fn is_recording(&self) -> AppResult<bool> {
        Ok(self.state.lock().await.track_id.is_some())
    }

    async fn recording_track_id(&self) -> AppResult<i64> {
        Ok(self.state.lock().await.track_id.unwrap_or(INVALID_TRACK_ID))
    }

    async fn start_new_track(&self) -> AppResult<i64> {
        let mut state = self.state.lock().await;
        if let Some(current) = state.track_id {
            return Err(AppError::resource_locked(format!(
                "track {current} is already being recorded"
            )));
        }

        let track_id = state.next_track_id;
        self.store
            .commit(
                PreferencesEditor::new()
                    .put_long(RECORDING_TRACK_ID_KEY, track_id)
                    .put_long(SELECTED_TRACK_ID_KEY, track_id),
            )
            .await?;

        state.next_track_id += 1;
        state.track_id = Some(track_id);
        state.track_statistics = TrackStatistics::new();
        state.segment_statistics = TrackStatistics::new();
        state.last_location = None;
        if !state.waypoints.is_empty() {
            debug!(
                markers = state.waypoints.len(),
                "Dropping markers of the previous track"
            );
            state.waypoints.clear();
        }
        state.push_waypoint(track_id, WaypointCreationRequest::DEFAULT_START_TRACK);

        info!(track_id, "Started recording");
        Ok(track_id)
    }

    async fn end_current_track(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let track_id = state.active_track("end track")?;

        self.store
            .commit(PreferencesEditor::new().put_long(RECORDING_TRACK_ID_KEY, INVALID_TRACK_ID))
            .await?;
        state.track_id = None;

        info!(
            track_id,
            points = state.track_statistics.point_count,
            distance_m = state.track_statistics.total_distance.to_m(),
            "Stopped recording"
        );
        Ok(())
    }

    async fn insert_waypoint(&self, request: WaypointCreationRequest) -> AppResult<i64> {
        let mut state = self.state.lock().await;
        let track_id = state.active_track("insert waypoint")?;
        let id = state.push_waypoint(track_id, request);
        debug!(track_id, waypoint_id = id, "Inserted waypoint");
        Ok(id)
    }

    async fn record_location(&self, point: TrackPoint) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.active_track("record location")?;
        if !point.latitude.is_finite() || !point.longitude.is_finite() {
            warn!(
                latitude = point.latitude,
                longitude = point.longitude,
                "Discarding fix with invalid coordinates"
            );
            return Err(AppError::invalid_input("location fix has invalid coordinates"));
        }

        state.track_statistics.add_point(point.clone());
        state.segment_statistics.add_point(point.clone());
        state.last_location = Some(point);
        Ok(())
    }

    async fn current_statistics(&self) -> AppResult<TrackStatistics> {
        let state = self.state.lock().await;
        state.active_track("read statistics")?;
        Ok(state.track_statistics.clone())
    }
}
