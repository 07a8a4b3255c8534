// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a limits rectangle is enforced while the camera is dragged.
///
/// The camera itself never consults this; it is carried here so that the
/// behavior and animation layers agree on a single definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LimitMode {
    /// Ignore limits entirely; the view may move freely.
    None,
    /// Clamp motion so the view can touch a bound (within one pixel) but
    /// never cross it.
    Clamp,
    /// Rubber-band past a bound with logarithmic resistance, and correct
    /// the overshoot with an animation on release.
    #[default]
    Band,
}

impl LimitMode {
    /// Returns `true` if limits participate in panning and zoom clamping.
    #[must_use]
    pub fn respects_limits(self) -> bool {
        !matches!(self, Self::None)
    }
}
