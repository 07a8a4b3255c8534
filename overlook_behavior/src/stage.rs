// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Everything interaction states act on, apart from the state itself.

use kurbo::{Point, Rect, Vec2};
use overlook_animation::{Interpolator, NavigateTo};
use overlook_camera::Camera;
use overlook_event_state::kinetics::Kinetics;
use overlook_view_model::{TreeError, VertexId, ViewTree};
use tracing::{trace, warn};

use crate::banding::{self, BandEdges};
use crate::config::BehaviorConfig;

/// Base of the exponential wheel zoom: one unit scales by 0.2%.
pub const ZOOM_BASE: f64 = 1.002;

#[derive(Debug)]
pub(crate) struct Stage {
    pub(crate) camera: Camera,
    pub(crate) tree: ViewTree,
    pub(crate) kinetics: Kinetics,
    pub(crate) config: BehaviorConfig,
    pub(crate) limits: Option<Rect>,
    pub(crate) scope: Option<VertexId>,
    /// Host time of the event or frame being processed.
    pub(crate) now_ms: f64,
}

impl Stage {
    pub(crate) fn new(camera: Camera, tree: ViewTree, config: BehaviorConfig) -> Self {
        Self {
            kinetics: Kinetics::new().with_threshold(config.momentum_threshold),
            camera,
            tree,
            config,
            limits: None,
            scope: None,
            now_ms: 0.0,
        }
    }

    /// Limits that currently constrain panning and zoom.
    pub(crate) fn active_limits(&self) -> Option<Rect> {
        self.limits
            .filter(|_| self.config.limit_mode.respects_limits())
    }

    /// Allowed scale range; the limits rectangle may never shrink below the viewport.
    pub(crate) fn zoom_range(&self) -> (f64, f64) {
        let mut min_zoom = self.config.min_zoom;
        if let Some(limits) = self.active_limits() {
            let view = self.camera.visual_size();
            min_zoom = min_zoom
                .max(view.width / limits.width())
                .max(view.height / limits.height());
        }
        (min_zoom, self.config.max_zoom)
    }

    /// Wheel zoom by `units` about the screen point `pos`.
    pub(crate) fn zoom_at(&mut self, pos: Point, units: f64) {
        if !units.is_finite() {
            warn!(units, "ignoring non-finite zoom units");
            return;
        }
        let (min_zoom, max_zoom) = self.zoom_range();
        // `max_zoom` wins if the range is inverted.
        let target = (self.camera.scale() * ZOOM_BASE.powf(units))
            .max(min_zoom)
            .min(max_zoom);
        let anchor_x = self.camera.cast_ray_x(pos.x);
        let anchor_y = self.camera.cast_ray_y(pos.y);
        trace!(units, target, "wheel zoom");
        self.camera.zoom_to_about(target, anchor_x, anchor_y);
    }

    /// Pans to the press-time offset `anchor_pan` moved by the pointer `drag`,
    /// honoring the limit mode. Returns the edges pushed past.
    pub(crate) fn pan_from(&mut self, anchor_pan: Point, drag: Vec2) -> BandEdges {
        let scale = self.camera.scale();
        let anchor = Point::new(anchor_pan.x / scale, anchor_pan.y / scale);
        let raw = Point::new(
            (anchor_pan.x - drag.x) / scale,
            (anchor_pan.y - drag.y) / scale,
        );
        let (origin, edges) = match self.active_limits() {
            Some(limits) => banding::constrain(
                self.config.limit_mode,
                limits,
                self.camera.world_rect().size(),
                anchor,
                raw,
                scale,
            ),
            None => (raw, BandEdges::empty()),
        };
        self.camera.move_to(origin.x * scale, origin.y * scale);
        edges
    }

    /// Nearest world center that puts the view back within limits.
    pub(crate) fn legal_center(&self) -> Point {
        match self.active_limits() {
            Some(limits) => banding::legal_center(limits, self.camera.world_rect()),
            None => self.camera.world_center(),
        }
    }

    /// Pan offsets that keep the view within limits at the current scale.
    pub(crate) fn legal_pan(&self) -> Option<Rect> {
        let limits = self.active_limits()?;
        let scale = self.camera.scale();
        let view = self.camera.world_rect().size();
        let (x0, x1) = banding::legal_range(limits.x0, limits.x1, view.width);
        let (y0, y1) = banding::legal_range(limits.y0, limits.y1, view.height);
        Some(Rect::new(x0 * scale, y0 * scale, x1 * scale, y1 * scale))
    }

    /// Fling with the released momentum, stopping at the limits.
    pub(crate) fn fling(&self) -> Interpolator {
        let throw = Interpolator::throw_camera(
            &self.camera,
            self.kinetics.speed(),
            self.kinetics.angle(),
            self.config.fling_ms,
        );
        match self.legal_pan() {
            Some(legal) => throw.clamp_target(legal),
            None => throw,
        }
    }

    pub(crate) fn navigate_to_vertex(&self, vertex: VertexId) -> Result<Interpolator, TreeError> {
        Interpolator::navigate_to_item(
            &self.camera,
            self.config.pan_zoom,
            self.config.navigation_velocity,
            &self.tree,
            vertex,
        )
    }

    /// Double-click zoom toward the world point under the screen point `pos`.
    pub(crate) fn navigate_to_point(&self, pos: Point) -> Interpolator {
        let world = self.camera.screen_to_world_point(pos);
        Interpolator::navigate_to(
            NavigateTo {
                target_x: world.x,
                target_y: world.y,
                target_width: self.config.double_click_target_width,
                velocity: self.config.navigation_velocity,
                pan_zoom: self.config.pan_zoom,
            },
            &self.camera,
        )
    }
}
