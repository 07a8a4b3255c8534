// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Animation: smooth, cancelable camera transitions.
//!
//! An [`Animation`] plays an [`Interpolator`] (a pure function from elapsed
//! milliseconds to a [`CameraPose`](overlook_camera::CameraPose)) against a
//! [`Camera`](overlook_camera::Camera). The host drives it from its frame
//! clock; nothing here spawns timers or threads.
//!
//! Interpolator factories:
//! - [`Interpolator::navigate_to_item`]: fly to a view-model vertex.
//! - [`Interpolator::navigate_to`]: fly to a world rectangle around a point.
//! - [`Interpolator::center_on_world`]: re-center at the current zoom.
//! - [`Interpolator::throw_camera`]: decelerating fling after a drag.
//!
//! ## Example
//!
//! ```rust
//! use overlook_animation::{Animation, Interpolator, Tick};
//! use overlook_camera::Camera;
//!
//! let mut camera = Camera::new(800.0, 600.0);
//! let mut animation = Animation::new(Interpolator::center_on_world(1000.0, 300.0, 250.0, &camera));
//!
//! animation.play(0.0);
//! assert_eq!(animation.tick(&mut camera, 125.0), Tick::Running);
//! assert_eq!(animation.tick(&mut camera, 250.0), Tick::Finished);
//! assert_eq!(camera.world_center().x, 1000.0);
//! ```

mod animation;
pub mod easing;
mod interpolator;

pub use animation::{Animation, Tick};
pub use interpolator::{
    FLING_GAIN, FRAME_FILL, Interpolator, InterpolatorKind, MAX_NAVIGATION_MS, MIN_NAVIGATION_MS,
    NavigateTo,
};
