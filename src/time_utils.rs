// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Vendor timestamp formats and strict timestamp parsing.

use crate::error::{DecodeError, Result};
use crate::models::Origin;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Garmin exports always carry a literal zero millisecond field.
pub const GARMIN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Strava exports have whole seconds only.
pub const STRAVA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const TIME_FORMATS: [(Origin, &str); 2] = [
    (Origin::Garmin, GARMIN_TIME_FORMAT),
    (Origin::Strava, STRAVA_TIME_FORMAT),
];

/// Look up the timestamp format for an origin.
pub fn time_format(origin: Origin) -> &'static str {
    TIME_FORMATS
        .iter()
        .find(|(o, _)| *o == origin)
        .map(|(_, format)| *format)
        .unwrap_or(GARMIN_TIME_FORMAT)
}

/// Parse a UTC timestamp using the exact format of `origin`.
///
/// chrono accepts signed years, unpadded fields and surrounding whitespace,
/// so the parsed value must also format back to exactly `value`.
/// `field` names the element the text came from and is only used for
/// error reporting.
pub fn parse_timestamp(field: &'static str, value: &str, origin: Origin) -> Result<DateTime<Utc>> {
    let format = time_format(origin);
    let invalid = || DecodeError::InvalidTimestamp {
        field,
        value: value.to_string(),
        format,
    };

    let naive = NaiveDateTime::parse_from_str(value, format).map_err(|_| invalid())?;
    if naive.format(format).to_string() != value {
        return Err(invalid());
    }
    Ok(naive.and_utc())
}
