// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limits enforcement for drags: clamping and rubber-band damping.
//!
//! Everything here works on the world-space origin of the visible rectangle
//! (its top-left corner). A limits rectangle `[lo, hi]` on an axis admits
//! origins in `[lo, hi - extent]`; when the view is wider than the limits
//! that range collapses onto the origin that centers the limits.
//!
//! Past a bound, [`LimitMode::Band`] lets the view follow the pointer with
//! logarithmic resistance:
//!
//! ```text
//! damp(d, L) = min(1 + log10(d / L), BAND_MAX_FACTOR) * L
//! ```
//!
//! where `d` is the drag distance and `L` the room the view had before the
//! bound. The overshoot is then undone by an animation on release.

use kurbo::{Point, Rect, Size};
use overlook_camera::LimitMode;

/// Smallest banding room, in screen pixels.
pub const BAND_MIN_PX: f64 = 24.0;

/// Farthest a banded view may travel from its anchor, in multiples of the room.
pub const BAND_MAX_FACTOR: f64 = 2.0;

bitflags::bitflags! {
    /// Limit edges a drag has pushed past.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BandEdges: u8 {
        /// Past the left bound.
        const LEFT   = 0b0001;
        /// Past the right bound.
        const RIGHT  = 0b0010;
        /// Past the top bound.
        const TOP    = 0b0100;
        /// Past the bottom bound.
        const BOTTOM = 0b1000;
    }
}

/// Which side of its legal range an axis ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overshoot {
    /// Inside the range.
    None,
    /// Below the low bound.
    Low,
    /// Above the high bound.
    High,
}

/// Legal origins along one axis for limits `[lo, hi]` and a view `extent` wide.
#[must_use]
pub fn legal_range(lo: f64, hi: f64, extent: f64) -> (f64, f64) {
    if hi - lo < extent {
        let centered = (lo + hi - extent) * 0.5;
        (centered, centered)
    } else {
        (lo, hi - extent)
    }
}

/// Damped travel for a drag of `d` with `room` before the bound.
///
/// Travel is undamped up to `room` and never exceeds
/// `BAND_MAX_FACTOR * room`.
#[must_use]
pub fn damp(d: f64, room: f64) -> f64 {
    if d <= room || room <= 0.0 {
        return d.min(room.max(0.0) * BAND_MAX_FACTOR).max(0.0);
    }
    (1.0 + (d / room).log10()).min(BAND_MAX_FACTOR) * room
}

/// Bands one axis.
///
/// `anchor` is the origin when the drag started, `raw` the origin the
/// pointer asks for, `range` the legal origins and `min_room` the smallest
/// room to damp against.
///
/// With the anchor inside the range, resistance starts at the bound: the
/// damped distance is measured from the bound as if the anchor were `room`
/// away from it, so a view resting on the bound is resisted immediately.
/// For `room` at least `min_room` this equals `anchor ∓ damp(d, room)`.
/// An anchor already outside the range is damped from the anchor itself.
#[must_use]
pub fn band_axis(anchor: f64, raw: f64, range: (f64, f64), min_room: f64) -> (f64, Overshoot) {
    let (lo, hi) = range;
    if raw < lo {
        if raw >= anchor {
            return (raw, Overshoot::Low);
        }
        if anchor < lo {
            return (anchor - damp(anchor - raw, min_room), Overshoot::Low);
        }
        let room = (anchor - lo).max(min_room);
        (lo - past_bound(lo - raw, room), Overshoot::Low)
    } else if raw > hi {
        if raw <= anchor {
            return (raw, Overshoot::High);
        }
        if anchor > hi {
            return (anchor + damp(raw - anchor, min_room), Overshoot::High);
        }
        let room = (hi - anchor).max(min_room);
        (hi + past_bound(raw - hi, room), Overshoot::High)
    } else {
        (raw, Overshoot::None)
    }
}

/// Damped travel beyond a bound for an overshoot of `over`, given `room`
/// before it. Never exceeds `(BAND_MAX_FACTOR - 1) * room`.
fn past_bound(over: f64, room: f64) -> f64 {
    (damp(room + over, room) - room).max(0.0)
}

/// Constrains a drag of the view origin from `anchor` toward `raw`.
///
/// `view` is the visible world size, `scale` the camera scale (for the
/// pixel-based slack and minimum room). Returns the origin to apply and the
/// edges pushed past; only [`LimitMode::Band`] records edges.
#[must_use]
pub fn constrain(
    mode: LimitMode,
    limits: Rect,
    view: Size,
    anchor: Point,
    raw: Point,
    scale: f64,
) -> (Point, BandEdges) {
    let range_x = legal_range(limits.x0, limits.x1, view.width);
    let range_y = legal_range(limits.y0, limits.y1, view.height);
    match mode {
        LimitMode::None => (raw, BandEdges::empty()),
        LimitMode::Clamp => {
            let slack = 1.0 / scale;
            let x = raw.x.max(range_x.0 - slack).min(range_x.1 + slack);
            let y = raw.y.max(range_y.0 - slack).min(range_y.1 + slack);
            (Point::new(x, y), BandEdges::empty())
        }
        LimitMode::Band => {
            let min_room = BAND_MIN_PX / scale;
            let (x, over_x) = band_axis(anchor.x, raw.x, range_x, min_room);
            let (y, over_y) = band_axis(anchor.y, raw.y, range_y, min_room);
            let mut edges = edges_for(over_x, range_x, BandEdges::LEFT, BandEdges::RIGHT);
            edges |= edges_for(over_y, range_y, BandEdges::TOP, BandEdges::BOTTOM);
            (Point::new(x, y), edges)
        }
    }
}

fn edges_for(over: Overshoot, range: (f64, f64), low: BandEdges, high: BandEdges) -> BandEdges {
    match over {
        Overshoot::None => BandEdges::empty(),
        // A collapsed range has no inside; both edges are in play.
        _ if range.0 == range.1 => low | high,
        Overshoot::Low => low,
        Overshoot::High => high,
    }
}

/// World point to center on so that `visible` sits inside `limits`,
/// moving it as little as possible.
#[must_use]
pub fn legal_center(limits: Rect, visible: Rect) -> Point {
    let (x0, x1) = legal_range(limits.x0, limits.x1, visible.width());
    let (y0, y1) = legal_range(limits.y0, limits.y1, visible.height());
    let origin = Point::new(visible.x0.clamp(x0, x1), visible.y0.clamp(y0, y1));
    origin + visible.size().to_vec2() * 0.5
}

/// Limits for a scope with world `bounds`: the bounds inflated on each side
/// by `overscroll` times their size.
#[must_use]
pub fn limits_around(bounds: Rect, overscroll: f64) -> Rect {
    let overscroll = if overscroll.is_finite() {
        overscroll.max(0.0)
    } else {
        0.0
    };
    bounds.inflate(bounds.width() * overscroll, bounds.height() * overscroll)
}
