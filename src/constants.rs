// ABOUTME: System-wide constants and environment lookups for Tracklog
// ABOUTME: Re-exports core constants and reads deployment overrides from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

pub use tracklog_core::constants::{preferences, recording, units};

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the `tracklog` binary
    pub const TRACKLOG: &str = "tracklog";
}

/// Environment variable names
pub mod env_keys {
    /// Path of the persisted preferences document
    pub const PREFERENCES_PATH: &str = "TRACKLOG_PREFERENCES_PATH";
    /// Display unit system
    pub const UNIT_SYSTEM: &str = "TRACKLOG_UNIT_SYSTEM";
    /// Recording-status poll interval in milliseconds
    pub const POLL_INTERVAL_MS: &str = "TRACKLOG_POLL_INTERVAL_MS";
    /// Default recording-status wait deadline in milliseconds
    pub const AWAIT_TIMEOUT_MS: &str = "TRACKLOG_AWAIT_TIMEOUT_MS";
    /// Log level
    pub const LOG_LEVEL: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Environment-based configuration lookups with defaults
pub mod env_config {
    use std::env;

    use super::env_keys;

    /// Raw preferences path override, if any
    #[must_use]
    pub fn preferences_path() -> Option<String> {
        env::var(env_keys::PREFERENCES_PATH).ok()
    }

    /// Raw unit system, defaults to `metric`
    #[must_use]
    pub fn unit_system() -> String {
        env::var(env_keys::UNIT_SYSTEM).unwrap_or_else(|_| "metric".into())
    }

    /// Raw poll interval, if overridden
    #[must_use]
    pub fn poll_interval_ms() -> Option<String> {
        env::var(env_keys::POLL_INTERVAL_MS).ok()
    }

    /// Raw await timeout, if overridden
    #[must_use]
    pub fn await_timeout_ms() -> Option<String> {
        env::var(env_keys::AWAIT_TIMEOUT_MS).ok()
    }

    /// Log level, defaults to `info`
    #[must_use]
    pub fn log_level() -> String {
        env::var(env_keys::LOG_LEVEL).unwrap_or_else(|_| "info".into())
    }

    /// Deployment environment, defaults to `development`
    #[must_use]
    pub fn environment() -> String {
        env::var(env_keys::ENVIRONMENT).unwrap_or_else(|_| "development".into())
    }
}
