// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::warn;

use crate::observer::{CameraObserver, ObserverId, Observers};

/// Smallest scale the camera will accept.
pub const MIN_SCALE: f64 = 1e-6;

/// Largest scale the camera will accept.
pub const MAX_SCALE: f64 = 1e6;

/// A complete camera transform: zoom factor plus pan offset.
///
/// This is what interpolators produce and what
/// [`Camera::zoom_and_move_to`] consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Zoom factor.
    pub scale: f64,
    /// Pan offset along X, in screen pixels.
    pub x: f64,
    /// Pan offset along Y, in screen pixels.
    pub y: f64,
}

impl CameraPose {
    /// Creates a pose from its parts.
    #[must_use]
    pub const fn new(scale: f64, x: f64, y: f64) -> Self {
        Self { scale, x, y }
    }

    /// Pose at `scale` that puts `world` in the middle of a `view`-sized viewport.
    #[must_use]
    pub fn centered_on(world: Point, scale: f64, view: Size) -> Self {
        Self {
            scale,
            x: world.x * scale - view.width * 0.5,
            y: world.y * scale - view.height * 0.5,
        }
    }

    /// World point shown in the middle of a `view`-sized viewport.
    #[must_use]
    pub fn world_center(&self, view: Size) -> Point {
        Point::new(
            (self.x + view.width * 0.5) / self.scale,
            (self.y + view.height * 0.5) / self.scale,
        )
    }
}

/// Pan/zoom camera over a world-space plane.
///
/// The camera maps world coordinates to screen pixels with a uniform scale
/// followed by a translation:
///
/// ```text
/// screen = world * scale - camera
/// world  = (screen + camera) / scale
/// ```
///
/// so the visible world rectangle is always
/// `(camera_x / scale, camera_y / scale, visual_width / scale, visual_height / scale)`.
///
/// Every mutating call rebuilds the cached transforms and then notifies all
/// attached [`CameraObserver`]s, in registration order, before returning.
/// Calls that do not change anything notify nothing.
#[derive(Debug)]
pub struct Camera {
    camera_x: f64,
    camera_y: f64,
    scale: f64,
    visual_size: Size,
    world_to_screen: Affine,
    screen_to_world: Affine,
    observers: Observers,
}

impl Camera {
    /// Creates a camera over a `visual_width` x `visual_height` pixel viewport.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial pan is zero (world origin at the top-left of the viewport).
    #[must_use]
    pub fn new(visual_width: f64, visual_height: f64) -> Self {
        let mut camera = Self {
            camera_x: 0.0,
            camera_y: 0.0,
            scale: 1.0,
            visual_size: sanitize_size(visual_width, visual_height).unwrap_or(Size::ZERO),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
            observers: Observers::default(),
        };
        camera.rebuild_transforms();
        camera
    }

    /// Current zoom factor. Always finite and `> 0`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pan offset along X, in screen pixels.
    #[must_use]
    pub fn camera_x(&self) -> f64 {
        self.camera_x
    }

    /// Pan offset along Y, in screen pixels.
    #[must_use]
    pub fn camera_y(&self) -> f64 {
        self.camera_y
    }

    /// The current transform as a [`CameraPose`].
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.scale, self.camera_x, self.camera_y)
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn visual_width(&self) -> f64 {
        self.visual_size.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn visual_height(&self) -> f64 {
        self.visual_size.height
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn visual_size(&self) -> Size {
        self.visual_size
    }

    /// World X at the left edge of the viewport.
    #[must_use]
    pub fn world_x(&self) -> f64 {
        self.camera_x / self.scale
    }

    /// World Y at the top edge of the viewport.
    #[must_use]
    pub fn world_y(&self) -> f64 {
        self.camera_y / self.scale
    }

    /// Width of the visible world rectangle.
    #[must_use]
    pub fn proj_width(&self) -> f64 {
        self.visual_size.width / self.scale
    }

    /// Height of the visible world rectangle.
    #[must_use]
    pub fn proj_height(&self) -> f64 {
        self.visual_size.height / self.scale
    }

    /// The visible world rectangle.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::from_origin_size(
            (self.world_x(), self.world_y()),
            (self.proj_width(), self.proj_height()),
        )
    }

    /// World point at the middle of the viewport.
    #[must_use]
    pub fn world_center(&self) -> Point {
        self.pose().world_center(self.visual_size)
    }

    /// World X under the screen X coordinate `screen_x`.
    #[must_use]
    pub fn cast_ray_x(&self, screen_x: f64) -> f64 {
        (screen_x + self.camera_x) / self.scale
    }

    /// World Y under the screen Y coordinate `screen_y`.
    #[must_use]
    pub fn cast_ray_y(&self, screen_y: f64) -> f64 {
        (screen_y + self.camera_y) / self.scale
    }

    /// Screen X at which world X `world_x` is drawn.
    #[must_use]
    pub fn screen_x(&self, world_x: f64) -> f64 {
        world_x * self.scale - self.camera_x
    }

    /// Screen Y at which world Y `world_y` is drawn.
    #[must_use]
    pub fn screen_y(&self, world_y: f64) -> f64 {
        world_y * self.scale - self.camera_y
    }

    /// World-to-screen transform.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// Screen-to-world transform.
    #[must_use]
    pub fn screen_to_world(&self) -> Affine {
        self.screen_to_world
    }

    /// Converts a world point into screen pixels.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world rectangle into screen pixels.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_screen.transform_rect_bbox(rect)
    }

    /// Converts a screen rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.screen_to_world.transform_rect_bbox(rect)
    }

    /// Pans to the absolute offset `(x, y)` in screen pixels.
    ///
    /// Non-finite offsets are rejected.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring non-finite camera pan");
            return;
        }
        if x == self.camera_x && y == self.camera_y {
            return;
        }
        self.camera_x = x;
        self.camera_y = y;
        self.rebuild_transforms();
        self.observers.pan_changed(x, y);
    }

    /// Zooms to `target_scale` while keeping the world point
    /// `(anchor_world_x, anchor_world_y)` at the same screen position.
    ///
    /// The scale is clamped into `[MIN_SCALE, MAX_SCALE]`.
    pub fn zoom_to_about(&mut self, target_scale: f64, anchor_world_x: f64, anchor_world_y: f64) {
        let Some(new_scale) = sanitize_scale(target_scale) else {
            return;
        };
        if !anchor_world_x.is_finite() || !anchor_world_y.is_finite() {
            warn!(
                anchor_world_x,
                anchor_world_y,
                "ignoring non-finite zoom anchor"
            );
            return;
        }
        if new_scale == self.scale {
            return;
        }
        // Screen position of the anchor must survive the scale change.
        let anchor_screen_x = self.screen_x(anchor_world_x);
        let anchor_screen_y = self.screen_y(anchor_world_y);
        let x = anchor_world_x * new_scale - anchor_screen_x;
        let y = anchor_world_y * new_scale - anchor_screen_y;
        self.apply(new_scale, x, y);
    }

    /// Sets scale and pan together.
    pub fn zoom_and_move_to(&mut self, scale: f64, x: f64, y: f64) {
        let Some(scale) = sanitize_scale(scale) else {
            return;
        };
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring non-finite camera pan");
            return;
        }
        self.apply(scale, x, y);
    }

    /// Applies a full [`CameraPose`].
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.zoom_and_move_to(pose.scale, pose.x, pose.y);
    }

    /// Pans so that the world point `(x, y)` sits in the middle of the viewport.
    pub fn center_on_world(&mut self, x: f64, y: f64) {
        let pose = CameraPose::centered_on(Point::new(x, y), self.scale, self.visual_size);
        self.move_to(pose.x, pose.y);
    }

    /// Resizes the viewport. Negative sizes are treated as zero.
    pub fn resize(&mut self, visual_width: f64, visual_height: f64) {
        let Some(size) = sanitize_size(visual_width, visual_height) else {
            warn!(
                visual_width,
                visual_height,
                "ignoring non-finite viewport size"
            );
            return;
        };
        if size == self.visual_size {
            return;
        }
        self.visual_size = size;
        self.rebuild_transforms();
        self.observers.view_resized(size.width, size.height);
    }

    /// Registers an observer; it is notified after every change.
    pub fn attach_observer(&mut self, observer: Box<dyn CameraObserver>) -> ObserverId {
        self.observers.attach(observer)
    }

    /// Unregisters an observer, handing it back if it was attached.
    pub fn detach_observer(&mut self, id: ObserverId) -> Option<Box<dyn CameraObserver>> {
        self.observers.detach(id)
    }

    /// Number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            pose: self.pose(),
            visual_size: self.visual_size,
            world_rect: self.world_rect(),
            observers: self.observers.len(),
        }
    }

    fn apply(&mut self, scale: f64, x: f64, y: f64) {
        let zoom_changed = scale != self.scale;
        let pan_changed = x != self.camera_x || y != self.camera_y;
        if !zoom_changed && !pan_changed {
            return;
        }
        self.scale = scale;
        self.camera_x = x;
        self.camera_y = y;
        self.rebuild_transforms();
        if zoom_changed {
            self.observers.zoom_changed(scale);
        }
        if pan_changed {
            self.observers.pan_changed(x, y);
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → screen: scale, then translate by the negated pan.
        let pan = Vec2::new(-self.camera_x, -self.camera_y);
        self.world_to_screen = Affine::translate(pan) * Affine::scale(self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

/// Debug snapshot of a [`Camera`].
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current scale and pan.
    pub pose: CameraPose,
    /// Viewport size in pixels.
    pub visual_size: Size,
    /// Visible world rectangle.
    pub world_rect: Rect,
    /// Number of attached observers.
    pub observers: usize,
}

fn sanitize_scale(scale: f64) -> Option<f64> {
    if !scale.is_finite() {
        warn!(scale, "ignoring non-finite camera scale");
        return None;
    }
    Some(scale.clamp(MIN_SCALE, MAX_SCALE))
}

fn sanitize_size(width: f64, height: f64) -> Option<Size> {
    if !width.is_finite() || !height.is_finite() {
        return None;
    }
    Some(Size::new(width.max(0.0), height.max(0.0)))
}
