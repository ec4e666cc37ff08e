// ABOUTME: Configuration management module for Tracklog settings
// ABOUTME: Loads storage location, unit system and wait cadence from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Tracklog
//!
//! - **Environment**: runtime configuration from environment variables

/// Environment configuration
pub mod environment;
