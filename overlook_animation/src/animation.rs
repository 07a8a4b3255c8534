// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use overlook_camera::Camera;
use tracing::trace;

use crate::interpolator::{Interpolator, InterpolatorKind};

/// Result of driving an [`Animation`] for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A pose was applied and the animation continues.
    Running,
    /// The exact end pose was applied and the animation is over.
    Finished,
    /// The animation is not playing; nothing was applied.
    Idle,
}

/// A cancelable, frame-driven run of an [`Interpolator`] against a [`Camera`].
///
/// The host owns the clock: it calls [`Animation::play`] once and then
/// [`Animation::tick`] every frame with its current time in milliseconds.
pub struct Animation {
    interpolator: Interpolator,
    started_at: Option<f64>,
    on_finished: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("interpolator", &self.interpolator)
            .field("started_at", &self.started_at)
            .field("on_finished", &self.on_finished.is_some())
            .finish()
    }
}

impl Animation {
    /// Wraps `interpolator`; the animation starts stopped.
    #[must_use]
    pub fn new(interpolator: Interpolator) -> Self {
        Self {
            interpolator,
            started_at: None,
            on_finished: None,
        }
    }

    /// The path being played.
    #[must_use]
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Shorthand for `self.interpolator().kind()`.
    #[must_use]
    pub fn kind(&self) -> InterpolatorKind {
        self.interpolator.kind()
    }

    /// Whether [`Animation::play`] has been called and the run is not over.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Registers a callback for natural completion.
    ///
    /// It fires at most once and never after [`Animation::stop`].
    pub fn set_on_finished(&mut self, callback: Box<dyn FnOnce()>) {
        self.on_finished = Some(callback);
    }

    /// Starts playing at host time `now_ms`.
    ///
    /// Does nothing while already playing; after a stop or completion the
    /// animation restarts from the beginning.
    pub fn play(&mut self, now_ms: f64) {
        if self.started_at.is_some() {
            return;
        }
        trace!(kind = ?self.kind(), now_ms, "animation started");
        self.started_at = Some(now_ms);
    }

    /// Applies the pose for `now_ms` to `camera`.
    pub fn tick(&mut self, camera: &mut Camera, now_ms: f64) -> Tick {
        let Some(started_at) = self.started_at else {
            return Tick::Idle;
        };
        let elapsed = (now_ms - started_at).max(0.0);
        if elapsed >= self.interpolator.duration_ms() {
            camera.set_pose(self.interpolator.target());
            self.started_at = None;
            trace!(kind = ?self.kind(), elapsed, "animation finished");
            if let Some(callback) = self.on_finished.take() {
                callback();
            }
            return Tick::Finished;
        }
        camera.set_pose(self.interpolator.at(elapsed));
        trace!(kind = ?self.kind(), elapsed, "animation tick");
        Tick::Running
    }

    /// Cancels the run. The camera keeps its last applied pose.
    pub fn stop(&mut self) {
        if self.started_at.take().is_some() {
            trace!(kind = ?self.kind(), "animation stopped");
        }
    }
}
