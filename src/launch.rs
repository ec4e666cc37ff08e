// ABOUTME: Entry contract for starting the track viewer, optionally with a file to import
// ABOUTME: Resolves a view request's URI reference to a local import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::errors::{AppError, AppResult};

/// How the viewer was started
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LaunchIntent {
    /// Plain start
    #[default]
    Main,
    /// Start asking to view some data, usually a track file to import
    View {
        /// Reference to the data, if the request carried one
        data: Option<Url>,
    },
}

impl LaunchIntent {
    /// View request from an optional reference
    ///
    /// Absolute filesystem paths are accepted as well as URIs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the reference is neither a URI nor an absolute path
    pub fn view(reference: Option<&str>) -> AppResult<Self> {
        let data = reference.map(parse_reference).transpose()?;
        debug!(data = ?data.as_ref().map(Url::as_str), "View launch requested");
        Ok(Self::View { data })
    }

    /// Local file to import, for a view request carrying a `file://` reference
    #[must_use]
    pub fn import_file(&self) -> Option<PathBuf> {
        match self {
            Self::View { data: Some(url) } if url.scheme() == "file" => url.to_file_path().ok(),
            _ => None,
        }
    }

    /// True when there is nothing to import
    #[must_use]
    pub fn is_cold_start(&self) -> bool {
        self.import_file().is_none()
    }
}

fn parse_reference(reference: &str) -> AppResult<Url> {
    let path = Path::new(reference);
    if path.is_absolute() {
        return Url::from_file_path(path)
            .map_err(|()| AppError::invalid_input(format!("cannot reference path {reference}")));
    }
    Url::parse(reference).map_err(|e| {
        AppError::invalid_input(format!("'{reference}' is not a URI or absolute path"))
            .with_source(e)
    })
}
