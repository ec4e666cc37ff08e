// ABOUTME: Track recording: the recording service, its UI binding and recording-state queries
// ABOUTME: Re-exports the service trait, the local recorder and the state monitor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Late-bound handle to the live service
pub mod connection;
/// Recording service trait and in-process recorder
pub mod service;
/// Recording-state monitor
pub mod state;

pub use connection::RecordingServiceConnection;
pub use service::{LocalRecordingService, TrackRecordingService, Waypoint};
pub use state::RecordingStateMonitor;
