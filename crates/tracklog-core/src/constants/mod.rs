// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, preferences and recording defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Persisted preference keys and sentinel values
pub mod preferences;

/// Recording coordination defaults (poll interval, timeouts)
pub mod recording;
