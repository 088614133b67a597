// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Producer of a GPX file.

use serde::Serialize;
use std::fmt;

/// Application or device class that exported a GPX file.
///
/// Garmin and Strava disagree on timestamp precision, so the origin decides
/// how every `<time>` in the document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Garmin,
    Strava,
}

impl Origin {
    /// Lower-case vendor name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Garmin => "garmin",
            Origin::Strava => "strava",
        }
    }

    /// Timestamp format (chrono `strftime` syntax) used by this origin.
    pub fn time_format(&self) -> &'static str {
        crate::time_utils::time_format(*self)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
