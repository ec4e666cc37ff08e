// ABOUTME: Parcel encoding of WaypointCreationRequest
// ABOUTME: Type tag, statistics flag, then five nullable strings in declared order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Parcelable, ParcelReader, ParcelWriter};
use crate::errors::{AppError, AppResult};
use crate::models::{WaypointCreationRequest, WaypointType};

impl Parcelable for WaypointCreationRequest {
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) -> AppResult<()> {
        parcel.write_i32(self.waypoint_type.wire_tag());
        parcel.write_bool(self.is_track_statistics);
        parcel.write_string(self.name.as_deref())?;
        parcel.write_string(self.category.as_deref())?;
        parcel.write_string(self.description.as_deref())?;
        parcel.write_string(self.icon_url.as_deref())?;
        parcel.write_string(self.photo_url.as_deref())
    }

    fn read_from_parcel(parcel: &mut ParcelReader<'_>) -> AppResult<Self> {
        let tag = parcel.read_i32()?;
        let waypoint_type = WaypointType::from_wire_tag(tag)
            .ok_or_else(|| AppError::invalid_format(format!("unknown waypoint type tag {tag}")))?;
        Ok(Self {
            waypoint_type,
            is_track_statistics: parcel.read_bool()?,
            name: parcel.read_string()?,
            category: parcel.read_string()?,
            description: parcel.read_string()?,
            icon_url: parcel.read_string()?,
            photo_url: parcel.read_string()?,
        })
    }
}
