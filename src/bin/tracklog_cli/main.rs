// ABOUTME: Tracklog CLI - inspect and drive the recording state stored in the preferences file
// ABOUTME: Handles start/stop/clear/await of recording, unit conversion and waypoint encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the persisted recording state
//! tracklog status
//!
//! # Start a track in one shell and wait for it from another
//! tracklog start
//! tracklog await --recording true --timeout-ms 5000
//!
//! # Stop recording and reset every preference
//! tracklog stop
//! tracklog clear
//!
//! # Convert 12.5 km for display in imperial units
//! tracklog convert 12.5 --from km --system imperial
//!
//! # Encode a waypoint request as hex
//! tracklog waypoint --name Summit --hex
//!
//! # Resolve a view request
//! tracklog open file:///tmp/track.gpx
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracklog::config::environment::TracklogConfig;
use tracklog::constants::env_keys;
use tracklog::logging::LoggingConfig;

use commands::units::DistanceUnit;
use commands::waypoint::WaypointKind;

#[derive(Parser)]
#[command(
    name = "tracklog",
    about = "Tracklog recording state CLI",
    long_about = "Inspect and drive the GPS track recording state shared through the Tracklog preferences file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Preferences file override
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show whether a track is being recorded
    Status,

    /// Start recording a new track
    Start,

    /// Stop recording the current track
    Stop,

    /// Reset the recording and selected tracks and wipe all preferences
    Clear,

    /// Wait until the recording state reaches the requested value
    Await {
        /// Desired state
        #[arg(long, action = clap::ArgAction::Set)]
        recording: bool,

        /// Deadline in milliseconds (defaults to `TRACKLOG_AWAIT_TIMEOUT_MS`)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Convert a distance for display in a unit system
    Convert {
        /// Distance value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of `value`
        #[arg(long, value_enum, default_value = "m")]
        from: DistanceUnit,

        /// Target unit system (defaults to the stored or configured one)
        #[arg(long)]
        system: Option<String>,
    },

    /// Encode or decode a waypoint creation request
    Waypoint {
        /// Marker kind
        #[arg(long = "type", value_enum, default_value = "waypoint")]
        kind: WaypointKind,

        /// Mark the statistics of the whole track
        #[arg(long)]
        track_statistics: bool,

        /// Marker name
        #[arg(long)]
        name: Option<String>,

        /// Marker category
        #[arg(long)]
        category: Option<String>,

        /// Marker description
        #[arg(long)]
        description: Option<String>,

        /// Icon URL
        #[arg(long)]
        icon_url: Option<String>,

        /// Photo URL
        #[arg(long)]
        photo_url: Option<String>,

        /// Print the wire encoding as hex instead of JSON
        #[arg(long)]
        hex: bool,

        /// Decode this hex wire encoding instead of building a request
        #[arg(long, conflicts_with = "hex")]
        decode: Option<String>,
    },

    /// Resolve how the viewer would start for a view request
    Open {
        /// File path or URI to view
        uri: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else if env::var_os(env_keys::LOG_LEVEL).is_none() {
        // Keep stdout-only output quiet unless asked
        logging.with_level("warn")
    } else {
        logging
    };
    logging.init()?;

    let mut config = TracklogConfig::from_env()?;
    if let Some(path) = cli.preferences {
        config.preferences_path = path;
    }
    debug!(path = %config.preferences_path.display(), "Using preferences file");

    match cli.command {
        Command::Status => commands::recording::status(&config).await?,
        Command::Start => commands::recording::start(&config).await?,
        Command::Stop => commands::recording::stop(&config).await?,
        Command::Clear => commands::recording::clear(&config).await?,
        Command::Await {
            recording,
            timeout_ms,
        } => commands::recording::await_status(&config, recording, timeout_ms).await?,
        Command::Convert {
            value,
            from,
            system,
        } => commands::units::convert(&config, value, from, system.as_deref()).await?,
        Command::Waypoint {
            kind,
            track_statistics,
            name,
            category,
            description,
            icon_url,
            photo_url,
            hex,
            decode,
        } => {
            if let Some(encoded) = decode {
                commands::waypoint::decode(&encoded)?;
            } else {
                let request = commands::waypoint::build_request(
                    kind,
                    track_statistics,
                    name,
                    category,
                    description,
                    icon_url,
                    photo_url,
                );
                commands::waypoint::encode(&request, hex)?;
            }
        }
        Command::Open { uri } => commands::launch::open(uri.as_deref())?,
    }

    Ok(())
}
