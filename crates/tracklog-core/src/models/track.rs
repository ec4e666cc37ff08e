// ABOUTME: Location fixes and running statistics for a recorded track
// ABOUTME: Accumulates distance, timing, speed and elevation as fixes arrive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::altitude::Altitude;
use super::distance::Distance;
use super::speed::Speed;
use crate::constants::units::{EARTH_RADIUS_M, MIN_MOVING_SPEED_MPS};

/// A single location fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Fix timestamp
    pub time: DateTime<Utc>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude if the provider reported one
    pub altitude: Option<Altitude>,
    /// Instantaneous speed if the provider reported one
    pub speed: Option<Speed>,
}

impl TrackPoint {
    /// Fix without altitude or speed
    #[must_use]
    pub const fn new(time: DateTime<Utc>, latitude: f64, longitude: f64) -> Self {
        Self {
            time,
            latitude,
            longitude,
            altitude: None,
            speed: None,
        }
    }

    /// Same fix with an altitude
    #[must_use]
    pub fn with_altitude(mut self, altitude: Altitude) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Same fix with a reported speed
    #[must_use]
    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Great-circle distance to `other` (haversine)
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Distance {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        Distance::of(EARTH_RADIUS_M * c)
    }
}

/// Running statistics of a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackStatistics {
    /// Time of the first fix
    pub start_time: Option<DateTime<Utc>>,
    /// Time of the latest fix
    pub stop_time: Option<DateTime<Utc>>,
    /// Distance covered
    pub total_distance: Distance,
    /// Time spent above the moving threshold
    pub moving_time: Duration,
    /// Fastest segment or reported speed
    pub max_speed: Speed,
    /// Lowest altitude seen
    pub min_altitude: Option<Altitude>,
    /// Highest altitude seen
    pub max_altitude: Option<Altitude>,
    /// Sum of climbs
    pub elevation_gain: Distance,
    /// Sum of descents, positive
    pub elevation_loss: Distance,
    /// Number of fixes folded in
    pub point_count: u64,
    #[serde(skip)]
    last_point: Option<TrackPoint>,
}

impl TrackStatistics {
    /// Empty statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a new fix into the statistics
    ///
    /// Fixes older than the previous one are ignored. NaN or infinite
    /// altitudes and speeds are treated as not reported.
    pub fn add_point(&mut self, mut point: TrackPoint) {
        discard_invalid_readings(&mut point);

        match self.last_point.take() {
            Some(previous) if point.time < previous.time => {
                debug!(
                    fix_time = %point.time,
                    previous_time = %previous.time,
                    "Ignoring out of order location fix"
                );
                self.last_point = Some(previous);
                return;
            }
            Some(previous) => self.add_segment(&previous, &point),
            None => self.start_time = Some(point.time),
        }

        if let Some(altitude) = point.altitude {
            self.min_altitude = Some(self.min_altitude.map_or(altitude, |m| m.min(altitude)));
            self.max_altitude = Some(self.max_altitude.map_or(altitude, |m| m.max(altitude)));
        }
        if let Some(speed) = point.speed {
            self.max_speed = self.max_speed.faster(speed);
        }

        self.stop_time = Some(point.time);
        self.point_count += 1;
        self.last_point = Some(point);
    }

    fn add_segment(&mut self, previous: &TrackPoint, point: &TrackPoint) {
        let segment = previous.distance_to(point);
        self.total_distance = self.total_distance + segment;

        let elapsed = (point.time - previous.time).to_std().unwrap_or_default();
        if !elapsed.is_zero() {
            let segment_speed = Speed::from_distance_duration(segment, elapsed);
            if segment_speed.to_mps() >= MIN_MOVING_SPEED_MPS {
                self.moving_time += elapsed;
            }
            self.max_speed = self.max_speed.faster(segment_speed);
        }

        if let (Some(from), Some(to)) = (previous.altitude, point.altitude) {
            let climb = to.height_above(from);
            if climb.is_invalid() {
                return;
            }
            if climb.greater_than(&Distance::ZERO) {
                self.elevation_gain = self.elevation_gain + climb;
            } else {
                self.elevation_loss = self.elevation_loss - climb;
            }
        }
    }

    /// Wall-clock time between the first and latest fix
    #[must_use]
    pub fn total_time(&self) -> Duration {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) => (stop - start).to_std().unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }

    /// Distance over total time; invalid when no time has elapsed
    #[must_use]
    pub fn average_speed(&self) -> Speed {
        Speed::from_distance_duration(self.total_distance, self.total_time())
    }

    /// Distance over moving time; invalid when never moving
    #[must_use]
    pub fn average_moving_speed(&self) -> Speed {
        Speed::from_distance_duration(self.total_distance, self.moving_time)
    }
}

fn discard_invalid_readings(point: &mut TrackPoint) {
    if let Some(altitude) = point.altitude.filter(Altitude::is_invalid) {
        debug!(altitude = %altitude, time = %point.time, "Dropping invalid altitude reading");
        point.altitude = None;
    }
    if let Some(speed) = point.speed.filter(Speed::is_invalid) {
        debug!(speed = %speed, time = %point.time, "Dropping invalid speed reading");
        point.speed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn test_distance_along_meridian() {
        let a = TrackPoint::new(at(0), 0.0, 0.0);
        let b = TrackPoint::new(at(0), 1.0, 0.0);
        let meters = a.distance_to(&b).to_m();
        assert!((meters - 111_194.9).abs() < 1.0, "got {meters}");
    }

    #[test]
    fn test_accumulates_segments() {
        let mut stats = TrackStatistics::new();
        stats.add_point(TrackPoint::new(at(0), 46.0, 7.0).with_altitude(Altitude::of_m(500.0)));
        stats.add_point(TrackPoint::new(at(60), 46.001, 7.0).with_altitude(Altitude::of_m(520.0)));
        stats.add_point(TrackPoint::new(at(120), 46.002, 7.0).with_altitude(Altitude::of_m(510.0)));

        assert_eq!(stats.point_count, 3);
        assert_eq!(stats.total_time(), Duration::from_secs(120));
        assert_eq!(stats.moving_time, Duration::from_secs(120));
        assert!((stats.total_distance.to_m() - 222.4).abs() < 0.5);
        assert_eq!(stats.elevation_gain, Distance::of(20.0));
        assert_eq!(stats.elevation_loss, Distance::of(10.0));
        assert_eq!(stats.min_altitude, Some(Altitude::of_m(500.0)));
        assert_eq!(stats.max_altitude, Some(Altitude::of_m(520.0)));
        assert!(!stats.average_speed().is_invalid());
    }

    #[test]
    fn test_stationary_time_is_not_moving() {
        let mut stats = TrackStatistics::new();
        stats.add_point(TrackPoint::new(at(0), 46.0, 7.0));
        stats.add_point(TrackPoint::new(at(600), 46.0, 7.0));
        assert_eq!(stats.moving_time, Duration::ZERO);
        assert_eq!(stats.total_time(), Duration::from_secs(600));
        assert!(stats.average_moving_speed().is_invalid());
    }

    #[test]
    fn test_out_of_order_fix_is_ignored() {
        let mut stats = TrackStatistics::new();
        stats.add_point(TrackPoint::new(at(10), 46.0, 7.0));
        stats.add_point(TrackPoint::new(at(5), 46.1, 7.0));
        assert_eq!(stats.point_count, 1);
        assert!(stats.total_distance.is_zero());
    }

    #[test]
    fn test_invalid_readings_do_not_poison_statistics() {
        let mut stats = TrackStatistics::new();
        stats.add_point(TrackPoint::new(at(0), 46.0, 7.0).with_altitude(Altitude::of_m(500.0)));
        stats.add_point(
            TrackPoint::new(at(60), 46.001, 7.0)
                .with_altitude(Altitude::of_m(f64::NAN))
                .with_speed(Speed::of_mps(f64::INFINITY)),
        );
        stats.add_point(TrackPoint::new(at(120), 46.002, 7.0).with_altitude(Altitude::of_m(510.0)));

        assert_eq!(stats.point_count, 3);
        assert!(!stats.max_speed.is_invalid());
        assert!(stats.max_speed.to_mps() < 5.0, "got {}", stats.max_speed);
        assert_eq!(stats.min_altitude, Some(Altitude::of_m(500.0)));
        assert_eq!(stats.max_altitude, Some(Altitude::of_m(510.0)));
        assert!(!stats.elevation_gain.is_invalid());
        assert!(!stats.elevation_loss.is_invalid());
        assert!(stats.elevation_loss.is_zero());
    }

    #[test]
    fn test_infinite_altitude_is_not_reported() {
        let mut stats = TrackStatistics::new();
        stats.add_point(
            TrackPoint::new(at(0), 46.0, 7.0).with_altitude(Altitude::of_m(f64::INFINITY)),
        );
        stats.add_point(TrackPoint::new(at(30), 46.0, 7.0).with_altitude(Altitude::of_m(420.0)));

        assert_eq!(stats.max_altitude, Some(Altitude::of_m(420.0)));
        assert!(stats.elevation_gain.is_zero());
    }

    #[test]
    fn test_empty_statistics() {
        let stats = TrackStatistics::new();
        assert_eq!(stats.total_time(), Duration::ZERO);
        assert!(stats.average_speed().is_invalid());
    }
}
