// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - decoding layer.

pub mod gpx;
pub mod xml;

pub use gpx::GpxDecoder;
pub use xml::XmlElement;
