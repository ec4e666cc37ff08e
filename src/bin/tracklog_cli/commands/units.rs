// ABOUTME: Unit conversion command for the tracklog CLI
// ABOUTME: Converts a distance into the large and small units of a unit system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use tracklog::{
    config::environment::TracklogConfig,
    constants::recording::DEFAULT_DISPLAY_PRECISION,
    errors::AppResult,
    models::{Distance, UnitSystem},
    preferences::{self, file::FilePreferences},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::display_conversion;

/// Units accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceUnit {
    /// Meters
    M,
    /// Kilometers
    Km,
    /// Statute miles
    Mi,
    /// Feet
    Ft,
    /// Nautical miles
    Nmi,
}

impl DistanceUnit {
    fn distance(self, value: f64) -> Distance {
        match self {
            Self::M => Distance::of(value),
            Self::Km => Distance::of_kilometer(value),
            Self::Mi => Distance::of_mile(value),
            Self::Ft => Distance::of_feet(value),
            Self::Nmi => Distance::of_nautical_mile(value),
        }
    }
}

/// Print `value` in `from` units as seen in the target unit system
pub async fn convert(
    config: &TracklogConfig,
    value: f64,
    from: DistanceUnit,
    system: Option<&str>,
) -> Result<()> {
    let unit_system: UnitSystem = match system {
        Some(name) => name.parse()?,
        None => {
            let store = FilePreferences::open(&config.preferences_path).await?;
            preferences::unit_system(&store, config.unit_system).await?
        }
    };

    display_conversion(from.distance(value), unit_system, DEFAULT_DISPLAY_PRECISION);
    Ok(())
}
