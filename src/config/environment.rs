// ABOUTME: Tracklog runtime configuration read from TRACKLOG_* environment variables
// ABOUTME: Preferences location, display unit system and status wait cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::constants::preferences::SETTINGS_FILE_NAME;
use crate::constants::recording::{DEFAULT_AWAIT_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS};
use crate::constants::{env_config, env_keys, service_names};
use crate::errors::{AppError, AppResult};
use crate::models::UnitSystem;

/// Runtime configuration for the recording coordination layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracklogConfig {
    /// Location of the persisted preferences document
    pub preferences_path: PathBuf,
    /// Display unit system used when preferences carry none
    pub unit_system: UnitSystem,
    /// Interval between recording-status polls
    pub poll_interval: Duration,
    /// Default deadline for recording-status waits
    pub await_timeout: Duration,
}

impl Default for TracklogConfig {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
            unit_system: UnitSystem::default(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            await_timeout: Duration::from_millis(DEFAULT_AWAIT_TIMEOUT_MS),
        }
    }
}

impl TracklogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when the unit system is unknown or a
    /// millisecond value is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let preferences_path = env_config::preferences_path()
            .map_or_else(default_preferences_path, PathBuf::from);

        let config = Self {
            preferences_path,
            unit_system: env_config::unit_system().parse()?,
            poll_interval: parse_millis(
                env_keys::POLL_INTERVAL_MS,
                env_config::poll_interval_ms(),
                DEFAULT_POLL_INTERVAL_MS,
            )?,
            await_timeout: parse_millis(
                env_keys::AWAIT_TIMEOUT_MS,
                env_config::await_timeout_ms(),
                DEFAULT_AWAIT_TIMEOUT_MS,
            )?,
        };

        info!(
            preferences.path = %config.preferences_path.display(),
            unit_system = %config.unit_system,
            poll_interval_ms = config.poll_interval.as_millis(),
            await_timeout_ms = config.await_timeout.as_millis(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// `<data dir>/tracklog/settings.json`, or `./settings.json` without a data dir
fn default_preferences_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, storing preferences in the working directory");
            PathBuf::from(SETTINGS_FILE_NAME)
        },
        |dir| dir.join(service_names::TRACKLOG).join(SETTINGS_FILE_NAME),
    )
}

fn parse_millis(key: &str, raw: Option<String>, default_ms: u64) -> AppResult<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(default_ms));
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::config_invalid(format!("{key} must be positive"))),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(e) => Err(
            AppError::config_invalid(format!("{key} is not a millisecond count: '{raw}'"))
                .with_source(e),
        ),
    }
}
