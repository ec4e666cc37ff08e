// ABOUTME: Integration tests for the distance, speed and altitude quantity types
// ABOUTME: Validates unit conversions, predicates, ordering and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeSet;
use tracklog::errors::ErrorCode;
use tracklog::models::{Altitude, Distance, Speed, UnitSystem};

const SAMPLES_M: [f64; 6] = [0.0, 1.5, 42.0, 1000.25, 12_345.5, -250.75];

#[test]
fn test_plus_then_minus_round_trips() {
    for a in SAMPLES_M {
        for b in SAMPLES_M {
            let a = Distance::of(a);
            let b = Distance::of(b);
            assert_eq!(a.plus(b).minus(b), a, "{a} + {b} - {b}");
        }
    }
}

#[test]
fn test_one_unit_is_exactly_one_large_unit() {
    for unit_system in UnitSystem::ALL {
        assert_eq!(Distance::one(unit_system).to_km_miles(unit_system), 1.0);
    }
}

#[test]
fn test_conversion_factors() {
    assert_eq!(Distance::of_kilometer(1.0).to_m(), 1000.0);
    assert!((Distance::of_mile(1.0).to_ft() - 5280.0).abs() < 1e-9);
    assert_eq!(Distance::of_nautical_mile(1.0).to_m(), 1852.0);
    assert!((Distance::of_feet(5280.0).to_mi() - 1.0).abs() < 1e-12);
    assert_eq!(Distance::of_cm(250.0).to_m(), 2.5);
    assert_eq!(Distance::of_mm(1500.0).to_m(), 1.5);
    assert_eq!(Distance::of_dm(10.0).to_m(), 1.0);
}

#[test]
fn test_unit_system_selects_conversion_path() {
    let d = Distance::of(1852.0);
    assert_eq!(d.to_km_miles(UnitSystem::Metric), 1.852);
    assert_eq!(d.to_km_miles(UnitSystem::NauticalImperial), 1.0);
    assert_eq!(d.to_m_ft(UnitSystem::Metric), 1852.0);
    assert!((d.to_m_ft(UnitSystem::Imperial) - 6076.115_485_564_304).abs() < 1e-6);
}

#[test]
fn test_zero_and_invalid_predicates() {
    assert!(Distance::of(0.0).is_zero());
    assert!(Distance::ZERO.is_zero());
    assert!(!Distance::of(0.001).is_zero());
    assert!(Distance::of(f64::NAN).is_invalid());
    assert!(Distance::of(f64::INFINITY).is_invalid());
    assert!(!Distance::of(1.0).is_invalid());
}

#[test]
fn test_division_by_zero_yields_ieee_values() {
    let ratio = Distance::of(10.0).divided_by(Distance::ZERO);
    assert!(ratio.is_infinite());
    let undefined = Distance::ZERO.divided_by(Distance::ZERO);
    assert!(undefined.is_nan());
    assert!(Distance::of(f64::NAN).plus(Distance::of(1.0)).is_invalid());
}

#[test]
fn test_less_than_is_strict_at_equality_boundary() {
    let a = Distance::of(100.0);
    let same = Distance::of(100.0);
    let more = Distance::of(100.5);

    assert!(!a.less_than(&same), "equal values are not less than each other");
    assert!(a.less_or_equal_than(&same));
    assert!(a.greater_or_equal_than(&same));
    assert!(!a.greater_than(&same));

    assert!(a.less_than(&more));
    assert!(more.greater_than(&a));
    assert!(!more.less_than(&a));
}

#[test]
fn test_total_order_handles_nan_and_signed_zero() {
    let nan = Distance::of(f64::NAN);
    assert_eq!(nan, Distance::of(-f64::NAN));
    assert!(Distance::of(-0.0) < Distance::of(0.0));

    let set: BTreeSet<Distance> = [3.0, 1.0, 2.0, 1.0].into_iter().map(Distance::of).collect();
    let ordered: Vec<f64> = set.into_iter().map(Distance::to_m).collect();
    assert_eq!(ordered, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_parse_from_text() {
    let parsed: Distance = "12.5".parse().unwrap();
    assert_eq!(parsed.to_m(), 12.5);

    let error = "twelve".parse::<Distance>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_unknown_unit_system_is_rejected() {
    assert_eq!(
        "nautical_imperial".parse::<UnitSystem>().unwrap(),
        UnitSystem::NauticalImperial
    );
    let error = "furlongs".parse::<UnitSystem>().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_speed_and_pace_conversions() {
    let speed = Speed::of_kmh(36.0);
    assert!((speed.to_mps() - 10.0).abs() < 1e-12);
    assert!((Speed::of_mph(1.0).to_mps() - 0.447_04).abs() < 1e-12);
    assert!((Speed::of_knots(1.0).to_kmh() - 1.852).abs() < 1e-12);

    let pace = Speed::of_kmh(10.0).to_pace(UnitSystem::Metric).unwrap();
    assert_eq!(pace.as_secs_f64().round(), 360.0);
    assert!(Speed::ZERO.to_pace(UnitSystem::Imperial).is_none());
}

#[test]
fn test_altitude_difference() {
    let climb = Altitude::of_m(1250.0).height_above(Altitude::of_m(1000.0));
    assert_eq!(climb.to_m(), 250.0);
    assert!((Altitude::of_ft(1000.0).to_m() - 304.8).abs() < 1e-9);
}
