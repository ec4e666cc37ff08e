// ABOUTME: Launch resolution command for the tracklog CLI
// ABOUTME: Reports whether a view request is a cold start or an import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;
use tracklog::{errors::AppResult, launch::LaunchIntent};

type Result<T> = AppResult<T>;

/// Resolve a view request for `uri`
pub fn open(uri: Option<&str>) -> Result<()> {
    let intent = LaunchIntent::view(uri)?;
    match intent.import_file() {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Import file does not exist");
            }
            println!("import {}", path.display());
        }
        None => println!("cold start"),
    }
    Ok(())
}
