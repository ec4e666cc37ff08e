// ABOUTME: Waypoint types and the request asking the recording service for a marker
// ABOUTME: Carries the stable wire tags used when the request crosses a process boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Kind of marker placed on a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointType {
    /// A user-placed waypoint
    Waypoint,
    /// A marker holding a statistics snapshot
    Statistics,
}

impl WaypointType {
    /// Wire tag table; tags are fixed and must never be renumbered
    const WIRE_TAGS: [(i32, Self); 2] = [(0, Self::Waypoint), (1, Self::Statistics)];

    /// Stable integer tag written on the wire
    #[must_use]
    pub const fn wire_tag(self) -> i32 {
        match self {
            Self::Waypoint => 0,
            Self::Statistics => 1,
        }
    }

    /// Variant for a wire tag, `None` for tags this build does not know
    #[must_use]
    pub fn from_wire_tag(tag: i32) -> Option<Self> {
        Self::WIRE_TAGS
            .iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, kind)| *kind)
    }
}

/// A request for the recording service to create a marker at the current location
///
/// `is_track_statistics` separates the marker inserted when a track starts
/// (whole-track statistics) from a mid-track statistics snapshot; both use
/// [`WaypointType::Statistics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointCreationRequest {
    /// Marker kind
    pub waypoint_type: WaypointType,
    /// True if this marker carries the statistics of the whole track
    pub is_track_statistics: bool,
    /// Display name
    pub name: Option<String>,
    /// Free-form category
    pub category: Option<String>,
    /// Longer description
    pub description: Option<String>,
    /// Icon reference
    pub icon_url: Option<String>,
    /// Photo reference
    pub photo_url: Option<String>,
}

impl WaypointCreationRequest {
    /// Plain waypoint with no metadata
    pub const DEFAULT_WAYPOINT: Self = Self::bare(WaypointType::Waypoint, false);

    /// Mid-track statistics marker
    pub const DEFAULT_STATISTICS: Self = Self::bare(WaypointType::Statistics, false);

    /// Statistics marker placed when a track starts
    pub const DEFAULT_START_TRACK: Self = Self::bare(WaypointType::Statistics, true);

    const fn bare(waypoint_type: WaypointType, is_track_statistics: bool) -> Self {
        Self {
            waypoint_type,
            is_track_statistics,
            name: None,
            category: None,
            description: None,
            icon_url: None,
            photo_url: None,
        }
    }

    /// Request with every field given explicitly
    #[must_use]
    pub const fn new(
        waypoint_type: WaypointType,
        is_track_statistics: bool,
        name: Option<String>,
        category: Option<String>,
        description: Option<String>,
        icon_url: Option<String>,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            waypoint_type,
            is_track_statistics,
            name,
            category,
            description,
            icon_url,
            photo_url,
        }
    }

    /// Waypoint carrying just a name
    #[must_use]
    pub fn named_waypoint(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::DEFAULT_WAYPOINT
        }
    }

    /// True for statistics markers of either flavour
    #[must_use]
    pub fn is_statistics(&self) -> bool {
        self.waypoint_type == WaypointType::Statistics
    }
}

impl Default for WaypointCreationRequest {
    fn default() -> Self {
        Self::DEFAULT_WAYPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_are_stable() {
        assert_eq!(WaypointType::Waypoint.wire_tag(), 0);
        assert_eq!(WaypointType::Statistics.wire_tag(), 1);
        for (tag, kind) in WaypointType::WIRE_TAGS {
            assert_eq!(kind.wire_tag(), tag);
            assert_eq!(WaypointType::from_wire_tag(tag), Some(kind));
        }
        assert_eq!(WaypointType::from_wire_tag(2), None);
        assert_eq!(WaypointType::from_wire_tag(-1), None);
    }

    #[test]
    fn test_defaults_differ_only_by_discriminators() {
        let stats = WaypointCreationRequest::DEFAULT_STATISTICS;
        let start = WaypointCreationRequest::DEFAULT_START_TRACK;
        assert_eq!(stats.waypoint_type, start.waypoint_type);
        assert!(!stats.is_track_statistics);
        assert!(start.is_track_statistics);
        assert_ne!(stats, start);
        assert!(!WaypointCreationRequest::DEFAULT_WAYPOINT.is_statistics());
    }

    #[test]
    fn test_named_waypoint() {
        let request = WaypointCreationRequest::named_waypoint("Trailhead");
        assert_eq!(request.name.as_deref(), Some("Trailhead"));
        assert_eq!(request.waypoint_type, WaypointType::Waypoint);
        assert_eq!(request.category, None);
    }
}
