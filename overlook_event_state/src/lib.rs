// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Event State: gesture state that outlives a single input event.
//!
//! Each module is a small accumulator that an interaction layer feeds on
//! every event of a gesture and queries at its end:
//!
//! - [`drag`]: press point, last position and the camera anchor captured at press.
//! - [`kinetics`]: rolling drag-step window used to decide whether a release flings.
//!
//! Neither module knows about the camera type or any event system; callers
//! pass plain `kurbo` points and deltas.

pub mod drag;
pub mod kinetics;
