// ABOUTME: Re-exports the unified error types from tracklog-core
// ABOUTME: Lets binaries and tests import errors from the main crate path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `tracklog-core` so the model crate and this crate
//! share one `AppError`. This module re-exports them under `tracklog::errors`.

pub use tracklog_core::errors::{AppError, AppResult, ErrorCode};
