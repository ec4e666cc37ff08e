// ABOUTME: Unit-system aware display formatting for distance, speed, altitude and pace
// ABOUTME: Chooses between large and small units relative to one large unit of the system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Display formatting
//!
//! Invalid measurements (NaN, infinite) render as [`INVALID_PLACEHOLDER`].

use crate::models::{Altitude, Distance, Speed, UnitSystem};

/// Rendered in place of NaN or infinite measurements
pub const INVALID_PLACEHOLDER: &str = "-";

/// Format a distance in the large unit when it reaches half of one large unit,
/// otherwise in whole small units
///
/// ```
/// use tracklog::formatters::format_distance;
/// use tracklog::models::{Distance, UnitSystem};
///
/// assert_eq!(format_distance(Distance::of(1500.0), UnitSystem::Metric, 2), "1.50 km");
/// assert_eq!(format_distance(Distance::of(120.0), UnitSystem::Metric, 2), "120 m");
/// ```
#[must_use]
pub fn format_distance(distance: Distance, unit_system: UnitSystem, precision: usize) -> String {
    if distance.is_invalid() {
        return INVALID_PLACEHOLDER.into();
    }
    let magnitude = Distance::of(distance.to_m().abs());
    let half_unit = Distance::one(unit_system).multiplied_by(0.5);
    if magnitude.greater_or_equal_than(&half_unit) {
        format!(
            "{:.precision$} {}",
            distance.to_km_miles(unit_system),
            unit_system.distance_unit_label()
        )
    } else {
        format!(
            "{:.0} {}",
            distance.to_m_ft(unit_system),
            unit_system.small_distance_unit_label()
        )
    }
}

/// Format a speed in km/h, mph or knots
#[must_use]
pub fn format_speed(speed: Speed, unit_system: UnitSystem, precision: usize) -> String {
    if speed.is_invalid() {
        return INVALID_PLACEHOLDER.into();
    }
    format!(
        "{:.precision$} {}",
        speed.to_kmh_or_mph(unit_system),
        unit_system.speed_unit_label()
    )
}

/// Format an altitude in whole meters or feet
#[must_use]
pub fn format_altitude(altitude: Altitude, unit_system: UnitSystem) -> String {
    if altitude.is_invalid() {
        return INVALID_PLACEHOLDER.into();
    }
    format!(
        "{:.0} {}",
        altitude.to_m_ft(unit_system),
        unit_system.small_distance_unit_label()
    )
}

/// Format a pace as `m:ss /unit`
#[must_use]
pub fn format_pace(speed: Speed, unit_system: UnitSystem) -> String {
    speed.to_pace(unit_system).map_or_else(
        || INVALID_PLACEHOLDER.into(),
        |pace| {
            let seconds = pace.as_secs_f64().round() as u64;
            format!(
                "{}:{:02} /{}",
                seconds / 60,
                seconds % 60,
                unit_system.distance_unit_label()
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_switches_unit_at_half() {
        assert_eq!(
            format_distance(Distance::of(499.0), UnitSystem::Metric, 2),
            "499 m"
        );
        assert_eq!(
            format_distance(Distance::of(500.0), UnitSystem::Metric, 2),
            "0.50 km"
        );
        assert_eq!(
            format_distance(Distance::of_mile(3.0), UnitSystem::Imperial, 1),
            "3.0 mi"
        );
        assert_eq!(
            format_distance(Distance::of_feet(100.0), UnitSystem::Imperial, 1),
            "100 ft"
        );
        assert_eq!(
            format_distance(Distance::of_nautical_mile(2.0), UnitSystem::NauticalImperial, 2),
            "2.00 NM"
        );
    }

    #[test]
    fn test_invalid_values_render_placeholder() {
        assert_eq!(
            format_distance(Distance::of(f64::NAN), UnitSystem::Metric, 2),
            INVALID_PLACEHOLDER
        );
        assert_eq!(
            format_speed(Speed::of_mps(f64::INFINITY), UnitSystem::Metric, 1),
            INVALID_PLACEHOLDER
        );
        assert_eq!(format_pace(Speed::ZERO, UnitSystem::Metric), INVALID_PLACEHOLDER);
    }

    #[test]
    fn test_speed_altitude_and_pace() {
        assert_eq!(
            format_speed(Speed::of_kmh(12.0), UnitSystem::Metric, 1),
            "12.0 km/h"
        );
        assert_eq!(
            format_altitude(Altitude::of_m(1000.0), UnitSystem::Metric),
            "1000 m"
        );
        assert_eq!(
            format_pace(Speed::of_kmh(12.0), UnitSystem::Metric),
            "5:00 /km"
        );
    }
}
