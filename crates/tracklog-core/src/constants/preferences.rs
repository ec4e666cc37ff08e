// ABOUTME: Persisted preference keys shared by the UI and the recording service
// ABOUTME: Includes the "no track" sentinel stored in track id preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Track id of the track being recorded, `INVALID_TRACK_ID` when idle
pub const RECORDING_TRACK_ID_KEY: &str = "recording_track_id";

/// Track id currently selected in the UI, `INVALID_TRACK_ID` when none
pub const SELECTED_TRACK_ID_KEY: &str = "selected_track_id";

/// User-selected unit system (`metric`, `imperial`, `nautical_imperial`)
pub const UNIT_SYSTEM_KEY: &str = "unit_system";

/// Sentinel meaning "no track"
pub const INVALID_TRACK_ID: i64 = -1;

/// File name of the persisted settings document
pub const SETTINGS_FILE_NAME: &str = "settings.json";
