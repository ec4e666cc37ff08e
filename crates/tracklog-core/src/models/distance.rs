// ABOUTME: Distance value type stored canonically in meters
// ABOUTME: Unit factories, arithmetic and unit-system aware conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quantity::{impl_quantity_arithmetic, impl_quantity_compare};
use super::unit_system::UnitSystem;
use crate::constants::units::{KM_TO_M, MI_TO_FT, MI_TO_M, NAUTICAL_MILE_TO_M};
use crate::errors::AppError;

/// Immutable distance in meters
///
/// Construction never fails: NaN and infinite values are kept and reported by
/// [`Distance::is_invalid`], so callers dividing by a zero distance can check
/// the result before using it.
///
/// ```
/// use tracklog_core::models::{Distance, UnitSystem};
///
/// let lap = Distance::of_kilometer(0.4);
/// let run = lap.multiplied_by(25.0);
/// assert_eq!(run.to_km_miles(UnitSystem::Metric), 10.0);
/// assert!(!run.is_invalid());
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl_quantity_compare!(Distance);
impl_quantity_arithmetic!(Distance);

impl Distance {
    /// Zero meters
    pub const ZERO: Self = Self(0.0);

    /// Distance from meters
    #[must_use]
    pub const fn of(distance_m: f64) -> Self {
        Self(distance_m)
    }

    /// Distance from meters, keeping absence
    #[must_use]
    pub fn of_opt(distance_m: Option<f64>) -> Option<Self> {
        distance_m.map(Self::of)
    }

    /// Distance from statute miles
    #[must_use]
    pub fn of_mile(distance_mi: f64) -> Self {
        Self(distance_mi * MI_TO_M)
    }

    /// Distance from nautical miles
    #[must_use]
    pub fn of_nautical_mile(distance_nm: f64) -> Self {
        Self(distance_nm * NAUTICAL_MILE_TO_M)
    }

    /// Distance from kilometers
    #[must_use]
    pub fn of_kilometer(distance_km: f64) -> Self {
        Self(distance_km * KM_TO_M)
    }

    /// Distance from feet
    #[must_use]
    pub fn of_feet(distance_ft: f64) -> Self {
        Self(distance_ft / MI_TO_FT * MI_TO_M)
    }

    /// Distance from millimeters
    #[must_use]
    pub fn of_mm(distance_mm: f64) -> Self {
        Self(0.001 * distance_mm)
    }

    /// Distance from centimeters
    #[must_use]
    pub fn of_cm(distance_cm: f64) -> Self {
        Self(0.01 * distance_cm)
    }

    /// Distance from decimeters
    #[must_use]
    pub fn of_dm(distance_dm: f64) -> Self {
        Self(0.1 * distance_dm)
    }

    /// One large display unit of the given system: 1 km, 1 mi or 1 NM
    #[must_use]
    pub fn one(unit_system: UnitSystem) -> Self {
        match unit_system {
            UnitSystem::Metric => Self::of_kilometer(1.0),
            UnitSystem::Imperial => Self::of_mile(1.0),
            UnitSystem::NauticalImperial => Self::of_nautical_mile(1.0),
        }
    }

    /// Meters
    #[must_use]
    pub const fn to_m(self) -> f64 {
        self.0
    }

    /// Kilometers
    #[must_use]
    pub fn to_km(self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Feet
    #[must_use]
    pub fn to_ft(self) -> f64 {
        self.to_mi() * MI_TO_FT
    }

    /// Statute miles
    #[must_use]
    pub fn to_mi(self) -> f64 {
        self.0 / MI_TO_M
    }

    /// Nautical miles
    #[must_use]
    pub fn to_nautical_miles(self) -> f64 {
        self.0 / NAUTICAL_MILE_TO_M
    }

    /// Value in the large unit of `unit_system` (km, mi or NM)
    #[must_use]
    pub fn to_km_miles(self, unit_system: UnitSystem) -> f64 {
        match unit_system {
            UnitSystem::Metric => self.to_km(),
            UnitSystem::Imperial => self.to_mi(),
            UnitSystem::NauticalImperial => self.to_nautical_miles(),
        }
    }

    /// Value in the small unit of `unit_system` (m or ft)
    #[must_use]
    pub fn to_m_ft(self, unit_system: UnitSystem) -> f64 {
        match unit_system {
            UnitSystem::Metric => self.to_m(),
            UnitSystem::Imperial | UnitSystem::NauticalImperial => self.to_ft(),
        }
    }
}

impl FromStr for Distance {
    type Err = AppError;

    /// Parse a plain number of meters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Self::of).map_err(|e| {
            AppError::invalid_format(format!("invalid distance '{s}': {e}")).with_source(e)
        })
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
