// ABOUTME: Structured logging setup for the tracklog library and CLI
// ABOUTME: Builds a tracing-subscriber registry with an env filter and json, pretty or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Every event goes to stderr; stdout is reserved for command output that
//! scripts capture (track ids, hex encodings).

use anyhow::Result;
use std::env;
use std::fmt;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::constants::{env_config, env_keys, service_names};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers
    Json,
    /// Human-readable output with every field
    Pretty,
    /// Single-line terminal output
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown is compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

/// How and how much to log
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `tracklog=debug,warn`
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Add source file and line to each event
    pub include_location: bool,
    /// Add thread id and name to each event
    pub include_thread: bool,
    /// Name reported in the startup event
    pub service_name: String,
    /// Crate version reported in the startup event
    pub service_version: String,
    /// Deployment environment (development, production)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
            include_location: false,
            include_thread: false,
            service_name: service_names::TRACKLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT` and `ENVIRONMENT`
    ///
    /// Production environments always include location and thread fields.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env_config::environment();
        let verbose_fields = environment == "production";
        let format = env::var(env_keys::LOG_FORMAT)
            .map_or_else(|_| LogFormat::default(), |raw| LogFormat::from_str_or_default(&raw));

        Self {
            level: env_config::log_level(),
            format,
            include_location: verbose_fields || env::var_os("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: verbose_fields || env::var_os("LOG_INCLUDE_THREAD").is_some(),
            environment,
            ..Self::default()
        }
    }

    /// Same configuration with another filter directive
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = subscriber_fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            // Full multi-field format; the ansi-only pretty formatter is not compiled in
            LogFormat::Pretty => registry.with(layer).try_init()?,
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init()?,
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
    }

    #[test]
    fn test_with_level_keeps_other_fields() {
        let config = LoggingConfig {
            format: LogFormat::Json,
            ..LoggingConfig::default()
        }
        .with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.service_name, "tracklog");
    }
}
