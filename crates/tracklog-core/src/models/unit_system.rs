// ABOUTME: User-selectable unit system driving display conversions
// ABOUTME: Parses the persisted preference value and rejects unknown systems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Unit system chosen by the user for display
///
/// Conversions on the quantity types match exhaustively on this enum, so an
/// unsupported system cannot reach them. Unknown names are rejected when
/// parsed instead of falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilometers, meters, km/h
    #[default]
    Metric,
    /// Statute miles, feet, mph
    Imperial,
    /// Nautical miles, feet, knots
    NauticalImperial,
}

impl UnitSystem {
    /// Every supported unit system
    pub const ALL: [Self; 3] = [Self::Metric, Self::Imperial, Self::NauticalImperial];

    /// Name persisted in preferences
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::NauticalImperial => "nautical_imperial",
        }
    }

    /// Label of the large distance unit
    #[must_use]
    pub const fn distance_unit_label(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
            Self::NauticalImperial => "NM",
        }
    }

    /// Label of the small distance unit (also used for altitude)
    #[must_use]
    pub const fn small_distance_unit_label(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::Imperial | Self::NauticalImperial => "ft",
        }
    }

    /// Label of the speed unit
    #[must_use]
    pub const fn speed_unit_label(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
            Self::NauticalImperial => "kn",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "nautical_imperial" | "nautical-imperial" => Ok(Self::NauticalImperial),
            other => Err(AppError::config_invalid(format!(
                "unknown unit system '{other}'"
            ))),
        }
    }
}
