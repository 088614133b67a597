// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Decoded activity model.

use super::Origin;
use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};

/// A single decoded GPX track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    /// Exporter detected from the root `creator` attribute
    pub origin: Origin,
    /// Track name (empty if the `<name>` element has no text)
    pub name: String,
    /// Start time from `<metadata><time>`
    pub start_time: DateTime<Utc>,
    /// Track points in document order
    pub track: Vec<TrackPoint>,
}

impl Activity {
    /// Number of track points.
    pub fn len(&self) -> usize {
        self.track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    /// Elapsed time of the last point that carries a timestamp.
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.track.iter().rev().find_map(|p| p.elapsed)
    }
}

/// One GPS sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Elevation in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele: Option<f64>,
    /// Time since the activity start (negative if the point predates it)
    #[serde(
        rename = "elapsed_secs",
        serialize_with = "serialize_elapsed_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub elapsed: Option<Duration>,
    /// Heart rate (beats/min)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr: Option<u16>,
    /// Cadence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cad: Option<u16>,
    /// Ambient temperature (°C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atemp: Option<i16>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Default::default()
        }
    }
}

fn serialize_elapsed_secs<S>(elapsed: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match elapsed {
        Some(d) => serializer.serialize_some(&d.num_seconds()),
        None => serializer.serialize_none(),
    }
}
