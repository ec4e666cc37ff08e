// ABOUTME: Integration tests for the WaypointCreationRequest wire encoding
// ABOUTME: Validates round trips, null versus empty strings, named defaults and malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tracklog::{
    errors::ErrorCode,
    models::{WaypointCreationRequest, WaypointType},
    parcel::{Parcelable, ParcelReader, ParcelWriter},
};

fn fully_populated() -> WaypointCreationRequest {
    WaypointCreationRequest::new(
        WaypointType::Statistics,
        true,
        Some("Summit".into()),
        Some("peaks".into()),
        Some("Top of the ridge, 2 962 m".into()),
        Some("https://example.com/icons/flag.png".into()),
        Some("file:///photos/summit.jpg".into()),
    )
}

#[test]
fn test_fully_populated_round_trip() {
    let request = fully_populated();
    let bytes = request.to_parcel_bytes().unwrap();
    let decoded = WaypointCreationRequest::from_parcel_bytes(&bytes).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_null_and_empty_strings_stay_distinct() {
    let request = WaypointCreationRequest {
        name: Some(String::new()),
        category: None,
        description: Some(String::new()),
        ..WaypointCreationRequest::DEFAULT_WAYPOINT
    };
    let bytes = request.to_parcel_bytes().unwrap();
    let decoded = WaypointCreationRequest::from_parcel_bytes(&bytes).unwrap();

    assert_eq!(decoded.name.as_deref(), Some(""));
    assert_eq!(decoded.category, None);
    assert_eq!(decoded.description.as_deref(), Some(""));
    assert_eq!(decoded.icon_url, None);
    assert_eq!(decoded, request);
}

#[test]
fn test_named_defaults() {
    let waypoint = WaypointCreationRequest::DEFAULT_WAYPOINT;
    let statistics = WaypointCreationRequest::DEFAULT_STATISTICS;
    let start = WaypointCreationRequest::DEFAULT_START_TRACK;

    assert_eq!(waypoint.waypoint_type, WaypointType::Waypoint);
    assert!(!waypoint.is_track_statistics);
    assert_eq!(statistics.waypoint_type, WaypointType::Statistics);
    assert!(!statistics.is_track_statistics);
    assert_eq!(start.waypoint_type, WaypointType::Statistics);
    assert!(start.is_track_statistics);
    assert_ne!(statistics, start, "the flag tells a start marker from a snapshot");

    for request in [waypoint, statistics, start] {
        let bytes = request.to_parcel_bytes().unwrap();
        assert_eq!(bytes.len(), 4 + 1 + 5 * 4);
        assert_eq!(
            WaypointCreationRequest::from_parcel_bytes(&bytes).unwrap(),
            request
        );
    }
}

#[test]
fn test_field_order_on_the_wire() {
    let bytes = fully_populated().to_parcel_bytes().unwrap();
    let mut parcel = ParcelReader::new(&bytes);

    assert_eq!(parcel.read_i32().unwrap(), 1);
    assert!(parcel.read_bool().unwrap());
    assert_eq!(parcel.read_string().unwrap().as_deref(), Some("Summit"));
    assert_eq!(parcel.read_string().unwrap().as_deref(), Some("peaks"));
    parcel.read_string().unwrap();
    parcel.read_string().unwrap();
    assert_eq!(
        parcel.read_string().unwrap().as_deref(),
        Some("file:///photos/summit.jpg")
    );
    parcel.finish().unwrap();
}

#[test]
fn test_list_round_trip() {
    let requests = vec![
        WaypointCreationRequest::DEFAULT_START_TRACK,
        WaypointCreationRequest::named_waypoint("Spring"),
        fully_populated(),
    ];
    let mut parcel = ParcelWriter::new();
    parcel.write_list(&requests).unwrap();
    let bytes = parcel.into_bytes();

    let mut reader = ParcelReader::new(&bytes);
    let decoded: Vec<WaypointCreationRequest> = reader.read_list().unwrap();
    reader.finish().unwrap();
    assert_eq!(decoded, requests);
}

#[test]
fn test_malformed_input_is_rejected() {
    let bytes = fully_populated().to_parcel_bytes().unwrap();

    for cut in [0, 3, 4, 5, 9, bytes.len() - 1] {
        let error = WaypointCreationRequest::from_parcel_bytes(&bytes[..cut]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat, "cut at {cut}");
    }

    let mut trailing = bytes.to_vec();
    trailing.push(0);
    assert!(WaypointCreationRequest::from_parcel_bytes(&trailing).is_err());

    let mut unknown_tag = bytes.to_vec();
    unknown_tag[..4].copy_from_slice(&2_i32.to_le_bytes());
    let error = WaypointCreationRequest::from_parcel_bytes(&unknown_tag).unwrap_err();
    assert!(error.message.contains("unknown waypoint type tag 2"));
}
