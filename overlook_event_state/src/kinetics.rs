// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinetics: estimate fling velocity from the last few drag steps.
//!
//! Every pointer move during a drag contributes one step. The estimate is the
//! mean of the most recent [`KINETICS_WINDOW`] steps, with an implicit time
//! step of one sample, so speeds are expressed in pixels per move event.
//!
//! The accumulator carries nothing across gestures once [`Kinetics::reset`]
//! is called; callers reset on both entering and leaving a drag.
//!
//! ```
//! use overlook_event_state::kinetics::Kinetics;
//!
//! let mut kinetics = Kinetics::default().with_threshold(10.0);
//! kinetics.update(10.0, 0.0);
//! kinetics.update(12.0, 0.0);
//! kinetics.update(15.0, 0.0);
//!
//! assert!((kinetics.speed() - 37.0 / 3.0).abs() < 1e-12);
//! assert_eq!(kinetics.angle(), 0.0);
//! assert!(kinetics.has_enough_momentum());
//!
//! kinetics.reset();
//! assert_eq!(kinetics.speed(), 0.0);
//! ```

use kurbo::Vec2;
use smallvec::SmallVec;

/// Number of recent drag steps considered by the estimate.
pub const KINETICS_WINDOW: usize = 3;

/// Default speed (pixels per move event) a release must exceed to fling.
pub const DEFAULT_MOMENTUM_THRESHOLD: f64 = 4.0;

/// Rolling drag-step accumulator.
#[derive(Clone, Debug)]
pub struct Kinetics {
    samples: SmallVec<[Vec2; KINETICS_WINDOW]>,
    threshold: f64,
}

impl Default for Kinetics {
    fn default() -> Self {
        Self {
            samples: SmallVec::new(),
            threshold: DEFAULT_MOMENTUM_THRESHOLD,
        }
    }
}

impl Kinetics {
    /// Creates an empty accumulator with [`DEFAULT_MOMENTUM_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the momentum threshold. Negative or non-finite values are
    /// treated as zero.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// Sets the momentum threshold in place.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = if threshold.is_finite() {
            threshold.max(0.0)
        } else {
            0.0
        };
    }

    /// Current momentum threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Records one drag step. Non-finite steps are dropped.
    pub fn update(&mut self, drag_dx: f64, drag_dy: f64) {
        if !drag_dx.is_finite() || !drag_dy.is_finite() {
            return;
        }
        if self.samples.len() == KINETICS_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(Vec2::new(drag_dx, drag_dy));
    }

    /// Mean step over the window; zero when empty.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        if self.samples.is_empty() {
            return Vec2::ZERO;
        }
        let sum = self.samples.iter().fold(Vec2::ZERO, |acc, s| acc + *s);
        sum / self.samples.len() as f64
    }

    /// Magnitude of [`Kinetics::velocity`].
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity().hypot()
    }

    /// Direction of [`Kinetics::velocity`] in radians, `atan2(dy, dx)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.velocity().atan2()
    }

    /// `true` when [`Kinetics::speed`] is strictly above the threshold.
    #[must_use]
    pub fn has_enough_momentum(&self) -> bool {
        self.speed() > self.threshold
    }

    /// Number of steps currently in the window.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Forget all recorded steps.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
