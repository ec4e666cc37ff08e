// ABOUTME: Unit conversion factors for distance, speed and altitude
// ABOUTME: Canonical units are meters, meters per second and meters above sea level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters in one kilometer
pub const KM_TO_M: f64 = 1000.0;

/// Meters in one statute mile
pub const MI_TO_M: f64 = 1609.344;

/// Feet in one statute mile
pub const MI_TO_FT: f64 = 5280.0;

/// Meters in one nautical mile
pub const NAUTICAL_MILE_TO_M: f64 = 1852.0;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Below this speed a segment counts as stationary for moving-time statistics
pub const MIN_MOVING_SPEED_MPS: f64 = 0.5;

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
