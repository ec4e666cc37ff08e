// ABOUTME: Core data models for measurements, waypoint requests and track statistics
// ABOUTME: Re-exports the value types shared by the recording service and the UI layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Measurement types keep one canonical value (meters, meters per second) and
//! convert on the way out according to the user's [`UnitSystem`].

pub(crate) mod quantity;

/// Altitude above sea level
pub mod altitude;
/// Distance in meters
pub mod distance;
/// Speed in meters per second
pub mod speed;
/// Location fixes and running track statistics
pub mod track;
/// Display unit system
pub mod unit_system;
/// Waypoint kinds and creation requests
pub mod waypoint;

pub use altitude::Altitude;
pub use distance::Distance;
pub use speed::Speed;
pub use track::{TrackPoint, TrackStatistics};
pub use unit_system::UnitSystem;
pub use waypoint::{WaypointCreationRequest, WaypointType};
