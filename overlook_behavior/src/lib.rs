// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Behavior: turns pointer and keyboard input into camera motion.
//!
//! [`Behavior`] is a small finite-state machine over a closed set of
//! [`StateKind`]s. It owns the [`Camera`](overlook_camera::Camera) and the
//! [`ViewTree`](overlook_view_model::ViewTree) and reacts to [`InputEvent`]s:
//!
//! - **Idle**: wheel and `+`/`-` zoom about a point; press starts panning;
//!   clicks, Home and navigation requests start animations.
//! - **Panning**: the camera follows the pointer. Past the limits rectangle
//!   the view rubber-bands (see [`banding`]); on release it either springs
//!   back, flings with its momentum, or stops.
//! - **Animating**: plays an [`Animation`](overlook_animation::Animation)
//!   driven by [`Behavior::tick`]. Unless forced, input interrupts it.
//! - **Drawing**, **Dragging**, **Connecting**, **Selecting**, **Editing**:
//!   reserved states that leave on stop or abort.
//!
//! `Abort` always returns to idle; `Stop` and Escape do so unless a forced
//! animation is running.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use overlook_behavior::{Behavior, BehaviorConfig, InputEvent, StateKind};
//! use overlook_camera::Camera;
//! use overlook_view_model::ViewTree;
//!
//! let mut behavior = Behavior::new(Camera::new(800.0, 600.0), ViewTree::new(), BehaviorConfig::default());
//!
//! behavior.handle(InputEvent::PointerDown { pos: Point::new(100.0, 100.0) }, 0.0);
//! assert_eq!(behavior.current_kind(), StateKind::Panning);
//!
//! behavior.handle(InputEvent::PointerMove { pos: Point::new(101.0, 100.0) }, 16.0);
//! behavior.handle(InputEvent::PointerUp { pos: Point::new(101.0, 100.0) }, 32.0);
//! assert_eq!(behavior.current_kind(), StateKind::Idle);
//! assert_eq!(behavior.camera().camera_x(), -1.0);
//! ```

pub mod banding;
mod behavior;
mod config;
mod event;
mod stage;
mod state;

pub use behavior::{Behavior, BehaviorDebugInfo};
pub use config::BehaviorConfig;
pub use event::{InputEvent, Key};
pub use stage::ZOOM_BASE;
pub use state::{StateKind, Target, TargetParams};
