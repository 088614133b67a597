// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! gpx-activity: decode Garmin and Strava GPX exports
//!
//! This crate turns a GPX 1.1 document into an [`Activity`]: the track name,
//! its absolute start time and the ordered track points with position,
//! elevation, time elapsed since the start and optional heart rate, cadence
//! and temperature extensions.
//!
//! ```no_run
//! let activity = gpx_activity::decode_file("morning_run.gpx")?;
//! println!("{} ({}): {} points", activity.name, activity.origin, activity.len());
//! # Ok::<(), gpx_activity::DecodeError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::DecoderConfig;
pub use error::{DecodeError, DecodeErrorKind, Result};
pub use models::{Activity, Origin, TrackPoint};
pub use services::GpxDecoder;

use std::io::BufRead;
use std::path::Path;

/// Decode a GPX stream with the default configuration.
pub fn decode<R: BufRead>(source: R) -> Result<Activity> {
    GpxDecoder::default().decode(source)
}

/// Decode an in-memory GPX document with the default configuration.
pub fn decode_str(document: &str) -> Result<Activity> {
    GpxDecoder::default().decode_str(document)
}

/// Decode a GPX file with the default configuration.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Activity> {
    GpxDecoder::default().decode_file(path)
}
