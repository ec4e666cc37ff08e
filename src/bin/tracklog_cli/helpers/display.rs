// ABOUTME: Output formatting helpers for the tracklog CLI
// ABOUTME: Prints recording state, conversions and waypoint requests on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracklog::{
    errors::AppResult,
    formatters::format_distance,
    models::{Distance, UnitSystem, WaypointCreationRequest},
};

/// Print the recording state summary
pub fn display_status(
    recording: bool,
    recording_track_id: i64,
    selected_track_id: i64,
    unit_system: UnitSystem,
) {
    println!("recording:          {recording}");
    println!("recording track id: {recording_track_id}");
    println!("selected track id:  {selected_track_id}");
    println!("unit system:        {unit_system}");
}

/// Print a bare track id so scripts can capture it
pub fn display_track_id(track_id: i64) {
    println!("{track_id}");
}

/// Print a distance in both units of `unit_system`
pub fn display_conversion(distance: Distance, unit_system: UnitSystem, precision: usize) {
    println!("{}", format_distance(distance, unit_system, precision));
    println!(
        "{:.precision$} {}",
        distance.to_km_miles(unit_system),
        unit_system.distance_unit_label()
    );
    println!(
        "{:.precision$} {}",
        distance.to_m_ft(unit_system),
        unit_system.small_distance_unit_label()
    );
}

/// Print a request as pretty JSON
pub fn display_request(request: &WaypointCreationRequest) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(request)?);
    Ok(())
}
