// ABOUTME: Core types and constants for Tracklog GPS track recording
// ABOUTME: Foundation crate with error handling, measurement units, waypoint requests, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracklog Core
//!
//! Foundation crate providing shared types and constants for the Tracklog
//! recording platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Unit conversion factors, preference keys and recording defaults
//! - **models**: Measurement value types, unit systems, waypoint requests and track statistics

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Distance`, `Speed`, `UnitSystem`, `WaypointCreationRequest`, etc.)
pub mod models;
