// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for decoded activities.

pub mod activity;
pub mod origin;

pub use activity::{Activity, TrackPoint};
pub use origin::Origin;
