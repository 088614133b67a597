// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::PathBuf;

/// Path to a file under tests/fixtures.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build a GPX document with the given creator, metadata time and
/// `<trkseg>` body. Pass `None` to omit the `creator` attribute.
#[allow(dead_code)]
pub fn gpx_doc(creator: Option<&str>, start: &str, trkseg_body: &str) -> String {
    let creator_attr = creator
        .map(|c| format!(r#" creator="{}""#, c))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx{creator_attr} version="1.1" xmlns="http://www.topografix.com/GPX/1/1" xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><time>{start}</time></metadata>
  <trk>
    <name>Test Track</name>
    <trkseg>
{trkseg_body}
    </trkseg>
  </trk>
</gpx>"#
    )
}

/// Garmin-style document (millisecond timestamps).
#[allow(dead_code)]
pub fn garmin_doc(trkseg_body: &str) -> String {
    gpx_doc(
        Some("Garmin Connect"),
        "2024-05-01T06:30:00.000Z",
        trkseg_body,
    )
}
