// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Camera: the pan/zoom transform behind an interactive diagram viewport.
//!
//! This crate provides a small, headless camera model. It focuses on:
//! - Camera state (pan offset + uniform zoom) and the visible world rectangle.
//! - Exact conversion between world and screen (pixel) space ("ray casting").
//! - Zooming about an anchor point without visible jumps.
//! - Synchronous change notification to observers (grids, overlays, renderers).
//!
//! It does **not** interpret input or animate. Callers are expected to:
//! - Drive the camera from an interaction layer (see `overlook_behavior`).
//! - Feed animations through [`Camera::zoom_and_move_to`] each frame.
//! - Register [`CameraObserver`]s for anything that must redraw on change.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_camera::Camera;
//!
//! // 800x600 viewport at scale 1, no pan.
//! let mut camera = Camera::new(800.0, 600.0);
//!
//! // Zoom in 2x around the world point under the viewport center.
//! let wx = camera.cast_ray_x(400.0);
//! let wy = camera.cast_ray_y(300.0);
//! camera.zoom_to_about(2.0, wx, wy);
//!
//! // The anchor did not move on screen.
//! assert!((camera.screen_x(wx) - 400.0).abs() < 1e-9);
//! assert!((camera.screen_y(wy) - 300.0).abs() < 1e-9);
//! ```
//!
//! ## Observers
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use overlook_camera::{Camera, CameraObserver};
//!
//! struct ZoomWatcher(Rc<Cell<f64>>);
//!
//! impl CameraObserver for ZoomWatcher {
//!     fn on_zoom_changed(&mut self, zoom: f64) {
//!         self.0.set(zoom);
//!     }
//! }
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let mut camera = Camera::new(800.0, 600.0);
//! camera.attach_observer(Box::new(ZoomWatcher(seen.clone())));
//! camera.zoom_and_move_to(3.0, 0.0, 0.0);
//! assert_eq!(seen.get(), 3.0);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** zoom factor.
//! - `scale` is clamped into [`MIN_SCALE`]..=[`MAX_SCALE`] at the camera
//!   boundary, so no sequence of calls can make it zero, negative or
//!   non-finite.
//! - Observers receive values only. Only the owner of the camera (the
//!   active interaction state or its animation) mutates it.

mod camera;
mod modes;
mod observer;

pub use camera::{Camera, CameraDebugInfo, CameraPose, MAX_SCALE, MIN_SCALE};
pub use modes::LimitMode;
pub use observer::{CameraObserver, ObserverId};
