// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves over normalized time.
//!
//! Both curves map `[0, 1]` onto `[0, 1]`, pin the endpoints, and clamp
//! inputs outside that range.

/// Cubic ease-in-out (`3t² - 2t³`), used for navigation.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quadratic ease-out, used for re-centering and flings.
///
/// Starts at full speed and decelerates linearly to rest.
#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}
