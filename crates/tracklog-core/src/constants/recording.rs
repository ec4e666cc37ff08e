// ABOUTME: Recording coordination defaults for status polling and waits
// ABOUTME: Values match the cadence the UI expects from the recording service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Interval between recording-status polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 20;

/// Default deadline for a recording-status wait
pub const DEFAULT_AWAIT_TIMEOUT_MS: u64 = 5_000;

/// Default display precision for large distance units
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;
