// ABOUTME: Main library entry point for the Tracklog recording platform
// ABOUTME: Recording-state coordination, preference storage, waypoint wire codec and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracklog
//!
//! Recording coordination for a GPS track recorder. The UI decides whether a
//! track is being recorded by combining a live binding to the recording
//! service with a persisted "recording track id" preference, and talks to
//! the service through waypoint creation requests.
//!
//! ## Architecture
//!
//! - **Preferences**: durable key-value store behind the [`preferences::PreferencesStore`] trait
//! - **Recording**: service trait, service connection and the [`recording::RecordingStateMonitor`]
//! - **Scheduler**: cooperative main loop with a one-shot idle barrier
//! - **Parcel**: positional binary codec for requests crossing a process boundary
//! - **Formatters**: unit-system aware display strings for measurements
//! - **Config**: configuration from environment variables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tracklog::errors::AppResult;
//! use tracklog::preferences::memory::InMemoryPreferences;
//! use tracklog::recording::{LocalRecordingService, RecordingStateMonitor, TrackRecordingService};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryPreferences::new());
//!     let service = LocalRecordingService::new(store.clone());
//!     let monitor = RecordingStateMonitor::new(store);
//!
//!     let track_id = service.start_new_track().await?;
//!     let observed = monitor
//!         .await_recording_status(Duration::from_secs(5), true)
//!         .await?;
//!     assert_eq!(observed, track_id);
//!     Ok(())
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants and environment lookups
pub mod constants;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Unit-system aware display formatting
pub mod formatters;

/// Launch intents (main action, view action with import file)
pub mod launch;

/// Structured logging setup
pub mod logging;

/// Positional binary wire codec
pub mod parcel;

/// Durable key-value preference storage
pub mod preferences;

/// Recording service, service connection and recording-state monitor
pub mod recording;

/// Cooperative main loop with idle notification
pub mod scheduler;

/// Core models re-exported for convenience
pub use tracklog_core::models;
