// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications for [`Camera`](crate::Camera).
//!
//! Observers are read-only: they receive the new values and never a handle
//! to the camera, so they cannot feed mutations back into the transform
//! while a notification is in flight.

use std::fmt;

/// Receives camera change notifications.
///
/// All methods default to doing nothing, so implementors only override the
/// notifications they care about (a grid overlay typically wants pan and
/// zoom, a border proxy only resizes).
pub trait CameraObserver {
    /// The pan offset changed; `x`/`y` are the new `camera_x`/`camera_y`.
    fn on_pan_changed(&mut self, x: f64, y: f64) {
        let _ = (x, y);
    }

    /// The zoom factor changed.
    fn on_zoom_changed(&mut self, zoom: f64) {
        let _ = zoom;
    }

    /// The viewport was resized to `width` x `height` pixels.
    fn on_view_resized(&mut self, width: f64, height: f64) {
        let _ = (width, height);
    }
}

/// Handle returned by [`Camera::attach_observer`](crate::Camera::attach_observer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Multicast list of observers in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn CameraObserver>)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Observers {
    pub(crate) fn attach(&mut self, observer: Box<dyn CameraObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn detach(&mut self, id: ObserverId) -> Option<Box<dyn CameraObserver>> {
        let pos = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn pan_changed(&mut self, x: f64, y: f64) {
        for (_, obs) in &mut self.entries {
            obs.on_pan_changed(x, y);
        }
    }

    pub(crate) fn zoom_changed(&mut self, zoom: f64) {
        for (_, obs) in &mut self.entries {
            obs.on_zoom_changed(zoom);
        }
    }

    pub(crate) fn view_resized(&mut self, width: f64, height: f64) {
        for (_, obs) in &mut self.entries {
            obs.on_view_resized(width, height);
        }
    }
}
