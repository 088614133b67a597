// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decoder configuration.
//!
//! The decoder reads no environment variables; host applications that keep
//! their own config file can embed a `DecoderConfig` and deserialize it with
//! serde. Missing fields fall back to the defaults.

use crate::models::Origin;
use serde::Deserialize;

/// Creator strings written by Strava's GPX exports.
pub const STRAVA_CREATORS: [&str; 2] = ["StravaGPX", "strava.com Android"];

/// Decoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Root `creator` values classified as [`Origin::Strava`].
    /// Comparison is exact; anything else is treated as Garmin.
    pub strava_creators: Vec<String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strava_creators: STRAVA_CREATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DecoderConfig {
    /// Add another creator string to treat as Strava.
    pub fn with_strava_creator(mut self, creator: impl Into<String>) -> Self {
        self.strava_creators.push(creator.into());
        self
    }

    /// Classify a document by its root `creator` attribute.
    ///
    /// An absent or unrecognized creator falls back to Garmin.
    pub fn classify(&self, creator: Option<&str>) -> Origin {
        match creator {
            Some(c) if self.strava_creators.iter().any(|s| s == c) => Origin::Strava,
            _ => Origin::Garmin,
        }
    }
}
