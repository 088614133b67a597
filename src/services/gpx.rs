// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GPX decoding service.
//!
//! Handles the decode workflow:
//! 1. Parse the document into a namespace-normalized tree
//! 2. Classify the exporter from the root `creator` attribute
//! 3. Locate `metadata` and `trk` / `name` and `trkseg` by name
//! 4. Parse the start time
//! 5. Extract every `trkpt` in document order

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::models::{Activity, Origin, TrackPoint};
use crate::services::xml::{self, XmlElement};
use crate::time_utils::parse_timestamp;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Decodes Garmin and Strava GPX exports into [`Activity`] values.
///
/// The decoder holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GpxDecoder {
    config: DecoderConfig,
}

impl GpxDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a GPX document from a buffered stream.
    pub fn decode<R: std::io::BufRead>(&self, source: R) -> Result<Activity> {
        let root = xml::parse(source)?;
        self.decode_tree(&root)
    }

    pub fn decode_str(&self, document: &str) -> Result<Activity> {
        self.decode(document.as_bytes())
    }

    pub fn decode_slice(&self, document: &[u8]) -> Result<Activity> {
        self.decode(document)
    }

    /// Open and decode a GPX file. The file is closed before returning.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<Activity> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Decoding GPX file");
        let file = File::open(path)?;
        self.decode(BufReader::new(file))
    }

    fn decode_tree(&self, root: &XmlElement) -> Result<Activity> {
        let origin = self.config.classify(root.attribute("creator"));
        tracing::debug!(
            origin = %origin,
            creator = root.attribute("creator").unwrap_or_default(),
            "Classified GPX origin"
        );

        let metadata = exactly_one(root, "gpx", "metadata")?;
        let trk = first_of(root, "gpx", "trk")?;
        let name = exactly_one(trk, "trk", "name")?;
        let trkseg = first_of(trk, "trk", "trkseg")?;

        let start_time = metadata
            .child("time")
            .ok_or(DecodeError::MissingField {
                element: "metadata",
                field: "time",
            })
            .and_then(|t| parse_timestamp("time", &t.text, origin))?;

        let track = trkseg
            .children_named("trkpt")
            .map(|pt| read_track_point(pt, start_time, origin))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            origin = %origin,
            points = track.len(),
            "Decoded GPX track"
        );

        Ok(Activity {
            origin,
            name: name.text.trim().to_string(),
            start_time,
            track,
        })
    }
}

/// Find the single `child` of `parent`; absent or duplicated is an error.
fn exactly_one<'a>(
    element: &'a XmlElement,
    parent: &'static str,
    child: &'static str,
) -> Result<&'a XmlElement> {
    let mut matches = element.children_named(child);
    match (matches.next(), matches.count()) {
        (Some(found), 0) => Ok(found),
        (first, rest) => Err(DecodeError::Structure {
            parent,
            child,
            found: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Find the first `child` of `parent`; extra siblings are ignored.
fn first_of<'a>(
    element: &'a XmlElement,
    parent: &'static str,
    child: &'static str,
) -> Result<&'a XmlElement> {
    let mut matches = element.children_named(child);
    let first = matches.next().ok_or(DecodeError::Structure {
        parent,
        child,
        found: 0,
    })?;
    let ignored = matches.count();
    if ignored > 0 {
        tracing::warn!(parent, child, ignored, "Ignoring additional elements");
    }
    Ok(first)
}

fn read_track_point(pt: &XmlElement, start_time: DateTime<Utc>, origin: Origin) -> Result<TrackPoint> {
    // Every attribute must be numeric, not only lat/lon
    let mut lat = None;
    let mut lon = None;
    for (key, value) in &pt.attributes {
        let number: f64 = parse_number(key, value)?;
        match key.as_str() {
            "lat" => lat = Some(number),
            "lon" => lon = Some(number),
            _ => {}
        }
    }

    let mut point = TrackPoint::new(
        lat.ok_or(DecodeError::MissingField {
            element: "trkpt",
            field: "lat",
        })?,
        lon.ok_or(DecodeError::MissingField {
            element: "trkpt",
            field: "lon",
        })?,
    );

    point.ele = optional_number(pt, "ele")?;
    point.elapsed = pt
        .child("time")
        .map(|t| parse_timestamp("time", &t.text, origin).map(|time| time - start_time))
        .transpose()?;

    if let Some(extensions) = pt.child("extensions") {
        // The vendor container (e.g. gpxtpx:TrackPointExtension) is the first child
        match extensions.first_child() {
            Some(vendor) => {
                point.hr = optional_number(vendor, "hr")?;
                point.cad = optional_number(vendor, "cad")?;
                point.atemp = optional_number(vendor, "atemp")?;
            }
            None => tracing::debug!("Empty extensions element on track point"),
        }
    }

    Ok(point)
}

fn optional_number<T: FromStr>(element: &XmlElement, child: &str) -> Result<Option<T>> {
    element
        .child(child)
        .map(|c| parse_number(child, &c.text))
        .transpose()
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| DecodeError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}
