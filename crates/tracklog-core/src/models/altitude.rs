// ABOUTME: Altitude value type in meters above sea level
// ABOUTME: Conversions to feet and height differences expressed as Distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::distance::Distance;
use super::quantity::impl_quantity_compare;
use super::unit_system::UnitSystem;

/// Immutable altitude in meters above sea level
///
/// Altitudes are positions, not lengths: two altitudes cannot be added, but
/// their difference is a [`Distance`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Altitude(f64);

impl_quantity_compare!(Altitude);

impl Altitude {
    /// Altitude from meters
    #[must_use]
    pub const fn of_m(altitude_m: f64) -> Self {
        Self(altitude_m)
    }

    /// Altitude from feet
    #[must_use]
    pub fn of_ft(altitude_ft: f64) -> Self {
        Self(Distance::of_feet(altitude_ft).to_m())
    }

    /// Meters
    #[must_use]
    pub const fn to_m(self) -> f64 {
        self.0
    }

    /// Feet
    #[must_use]
    pub fn to_ft(self) -> f64 {
        Distance::of(self.0).to_ft()
    }

    /// Value in the small unit of `unit_system` (m or ft)
    #[must_use]
    pub fn to_m_ft(self, unit_system: UnitSystem) -> f64 {
        Distance::of(self.0).to_m_ft(unit_system)
    }

    /// Signed height difference `self - lower`
    #[must_use]
    pub fn height_above(self, lower: Self) -> Distance {
        Distance::of(self.0 - lower.0)
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_above() {
        let summit = Altitude::of_m(2962.0);
        let valley = Altitude::of_m(708.0);
        assert_eq!(summit.height_above(valley), Distance::of(2254.0));
        assert_eq!(valley.height_above(summit), Distance::of(-2254.0));
    }

    #[test]
    fn test_feet_round_trip() {
        let altitude = Altitude::of_ft(1000.0);
        assert!((altitude.to_ft() - 1000.0).abs() < 1e-9);
        assert!((altitude.to_m() - 304.8).abs() < 1e-9);
    }
}
