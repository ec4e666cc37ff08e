// ABOUTME: Speed value type stored canonically in meters per second
// ABOUTME: Unit factories, distance/time derivation, pace and unit-system conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::distance::Distance;
use super::quantity::{impl_quantity_arithmetic, impl_quantity_compare};
use super::unit_system::UnitSystem;
use crate::constants::units::{KM_TO_M, MI_TO_M, NAUTICAL_MILE_TO_M, SECONDS_PER_HOUR};

/// Immutable speed in meters per second
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(f64);

impl_quantity_compare!(Speed);
impl_quantity_arithmetic!(Speed);

impl Speed {
    /// Standing still
    pub const ZERO: Self = Self(0.0);

    /// Speed from meters per second
    #[must_use]
    pub const fn of_mps(speed_mps: f64) -> Self {
        Self(speed_mps)
    }

    /// Speed from kilometers per hour
    #[must_use]
    pub fn of_kmh(speed_kmh: f64) -> Self {
        Self(speed_kmh * KM_TO_M / SECONDS_PER_HOUR)
    }

    /// Speed from statute miles per hour
    #[must_use]
    pub fn of_mph(speed_mph: f64) -> Self {
        Self(speed_mph * MI_TO_M / SECONDS_PER_HOUR)
    }

    /// Speed from knots
    #[must_use]
    pub fn of_knots(speed_kn: f64) -> Self {
        Self(speed_kn * NAUTICAL_MILE_TO_M / SECONDS_PER_HOUR)
    }

    /// Average speed over `distance` covered in `duration`
    ///
    /// A zero duration yields an infinite or NaN speed, never an error.
    #[must_use]
    pub fn from_distance_duration(distance: Distance, duration: Duration) -> Self {
        Self(distance.to_m() / duration.as_secs_f64())
    }

    /// Larger of two speeds; an invalid operand loses to a valid one
    #[must_use]
    pub fn faster(self, other: Self) -> Self {
        if self.is_invalid() {
            other
        } else if other.is_invalid() || self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// Meters per second
    #[must_use]
    pub const fn to_mps(self) -> f64 {
        self.0
    }

    /// Kilometers per hour
    #[must_use]
    pub fn to_kmh(self) -> f64 {
        self.0 * SECONDS_PER_HOUR / KM_TO_M
    }

    /// Statute miles per hour
    #[must_use]
    pub fn to_mph(self) -> f64 {
        self.0 * SECONDS_PER_HOUR / MI_TO_M
    }

    /// Knots
    #[must_use]
    pub fn to_knots(self) -> f64 {
        self.0 * SECONDS_PER_HOUR / NAUTICAL_MILE_TO_M
    }

    /// Value in the speed unit of `unit_system` (km/h, mph or kn)
    #[must_use]
    pub fn to_kmh_or_mph(self, unit_system: UnitSystem) -> f64 {
        match unit_system {
            UnitSystem::Metric => self.to_kmh(),
            UnitSystem::Imperial => self.to_mph(),
            UnitSystem::NauticalImperial => self.to_knots(),
        }
    }

    /// Time needed to cover one large unit of `unit_system` at this speed
    ///
    /// `None` when standing still or when the speed is invalid.
    #[must_use]
    pub fn to_pace(self, unit_system: UnitSystem) -> Option<Duration> {
        if self.is_invalid() || self.0 <= 0.0 {
            return None;
        }
        let seconds = Distance::one(unit_system).to_m() / self.0;
        Duration::try_from_secs_f64(seconds).ok()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m/s", self.0)
    }
}
