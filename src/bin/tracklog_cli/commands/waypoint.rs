// ABOUTME: Waypoint request commands for the tracklog CLI
// ABOUTME: Builds a WaypointCreationRequest and prints it as JSON or wire hex, or decodes hex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use tracing::debug;
use tracklog::{
    errors::{AppError, AppResult},
    models::{WaypointCreationRequest, WaypointType},
    parcel::Parcelable,
};

type Result<T> = AppResult<T>;

use crate::helpers::display::display_request;

/// Marker kinds accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WaypointKind {
    /// Plain waypoint
    Waypoint,
    /// Statistics marker
    Statistics,
}

impl From<WaypointKind> for WaypointType {
    fn from(kind: WaypointKind) -> Self {
        match kind {
            WaypointKind::Waypoint => Self::Waypoint,
            WaypointKind::Statistics => Self::Statistics,
        }
    }
}

/// Assemble a request from command-line fields
pub fn build_request(
    kind: WaypointKind,
    track_statistics: bool,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    icon_url: Option<String>,
    photo_url: Option<String>,
) -> WaypointCreationRequest {
    WaypointCreationRequest::new(
        kind.into(),
        track_statistics,
        name,
        category,
        description,
        icon_url,
        photo_url,
    )
}

/// Print a request as JSON, or as its wire encoding in hex
pub fn encode(request: &WaypointCreationRequest, as_hex: bool) -> Result<()> {
    if as_hex {
        let bytes = request.to_parcel_bytes()?;
        debug!(bytes = bytes.len(), "Encoded waypoint request");
        println!("{}", hex::encode(bytes));
    } else {
        display_request(request)?;
    }
    Ok(())
}

/// Decode a hex wire encoding and print the request as JSON
pub fn decode(encoded: &str) -> Result<()> {
    let bytes = hex::decode(encoded.trim()).map_err(|e| {
        AppError::invalid_format("waypoint encoding is not valid hex").with_source(e)
    })?;
    let request = WaypointCreationRequest::from_parcel_bytes(&bytes)?;
    display_request(&request)
}
