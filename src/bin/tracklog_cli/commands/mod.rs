// ABOUTME: Re-exports command modules for the tracklog CLI
// ABOUTME: Provides recording, unit conversion, waypoint and launch commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod launch;
pub mod recording;
pub mod units;
pub mod waypoint;
