// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera interpolators: pure functions from elapsed time to a [`CameraPose`].

use kurbo::{Point, Rect, Size, Vec2};
use overlook_camera::{Camera, CameraPose, MAX_SCALE, MIN_SCALE};
use overlook_view_model::{TreeError, VertexId, ViewTree};

use crate::easing::{ease_out_quad, smoothstep};

/// Fraction of the viewport a framed rectangle fills.
pub const FRAME_FILL: f64 = 0.9;

/// Shortest navigation, in milliseconds.
pub const MIN_NAVIGATION_MS: f64 = 200.0;

/// Longest navigation, in milliseconds.
pub const MAX_NAVIGATION_MS: f64 = 1500.0;

/// Pixels a fling travels per unit of release speed.
pub const FLING_GAIN: f64 = 20.0;

/// Which factory produced an [`Interpolator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterpolatorKind {
    /// [`Interpolator::navigate_to_item`].
    NavigateToItem,
    /// [`Interpolator::navigate_to`].
    NavigateTo,
    /// [`Interpolator::center_on_world`].
    CenterOnWorld,
    /// [`Interpolator::throw_camera`].
    Throw,
}

/// Parameters of [`Interpolator::navigate_to`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavigateTo {
    /// World X the framed rectangle is centered on.
    pub target_x: f64,
    /// World Y the framed rectangle is centered on.
    pub target_y: f64,
    /// World width of the framed rectangle; its height follows the viewport aspect.
    pub target_width: f64,
    /// Travel speed in screen pixels per millisecond.
    pub velocity: f64,
    /// Pan/zoom preference in `[0, 1]`: `0.5` is simultaneous, above pans first.
    pub pan_zoom: f64,
}

/// A time-parameterized camera path.
///
/// Every interpolator returns its start pose at `t <= 0` and exactly its
/// target pose at `t >= duration_ms()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    kind: InterpolatorKind,
    path: Path,
}

#[derive(Clone, Debug, PartialEq)]
enum Path {
    /// Smoothstep flight with blended pan and log-space zoom.
    Flight(Flight),
    /// Ease-out pan at constant scale.
    Glide {
        from: CameraPose,
        to: CameraPose,
        duration_ms: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
struct Flight {
    from: CameraPose,
    to: CameraPose,
    view: Size,
    from_center: Point,
    to_center: Point,
    bias: f64,
    duration_ms: f64,
}

impl Interpolator {
    /// Frames the world bounds of `vertex` at [`FRAME_FILL`] of the viewport.
    ///
    /// Fails if `vertex` is not alive in `tree`.
    pub fn navigate_to_item(
        camera: &Camera,
        pan_zoom: f64,
        velocity: f64,
        tree: &ViewTree,
        vertex: VertexId,
    ) -> Result<Self, TreeError> {
        let bounds = tree.world_bounds(vertex)?;
        Ok(Self {
            kind: InterpolatorKind::NavigateToItem,
            path: Path::Flight(Flight::framing(camera, bounds, velocity, pan_zoom)),
        })
    }

    /// Frames a `target_width`-wide world rectangle centered on the target point.
    #[must_use]
    pub fn navigate_to(params: NavigateTo, camera: &Camera) -> Self {
        let view = camera.visual_size();
        let aspect = if view.width > 0.0 {
            view.height / view.width
        } else {
            1.0
        };
        let rect = Rect::from_center_size(
            (params.target_x, params.target_y),
            (params.target_width, params.target_width * aspect),
        );
        Self {
            kind: InterpolatorKind::NavigateTo,
            path: Path::Flight(Flight::framing(camera, rect, params.velocity, params.pan_zoom)),
        }
    }

    /// Re-centers the viewport on `(x, y)` over `duration_ms` at the current scale.
    #[must_use]
    pub fn center_on_world(x: f64, y: f64, duration_ms: f64, camera: &Camera) -> Self {
        let from = camera.pose();
        let to = CameraPose::centered_on(Point::new(x, y), from.scale, camera.visual_size());
        Self {
            kind: InterpolatorKind::CenterOnWorld,
            path: Path::Glide {
                from,
                to,
                duration_ms: sanitize_duration(duration_ms),
            },
        }
    }

    /// Continues a drag released at `speed` px/sample along `angle` radians.
    ///
    /// The camera offset moves opposite to the drag direction so the content
    /// keeps travelling with the pointer, decelerating to rest.
    #[must_use]
    pub fn throw_camera(camera: &Camera, speed: f64, angle: f64, duration_ms: f64) -> Self {
        let from = camera.pose();
        let distance = if speed.is_finite() {
            speed.max(0.0) * FLING_GAIN
        } else {
            0.0
        };
        let offset = if angle.is_finite() {
            -Vec2::from_angle(angle) * distance
        } else {
            Vec2::ZERO
        };
        let to = CameraPose::new(from.scale, from.x + offset.x, from.y + offset.y);
        Self {
            kind: InterpolatorKind::Throw,
            path: Path::Glide {
                from,
                to,
                duration_ms: sanitize_duration(duration_ms),
            },
        }
    }

    /// Keeps the target pan offset of a glide within `legal`.
    ///
    /// Flights are returned unchanged.
    #[must_use]
    pub fn clamp_target(mut self, legal: Rect) -> Self {
        if let Path::Glide { to, .. } = &mut self.path {
            to.x = to.x.max(legal.x0).min(legal.x1);
            to.y = to.y.max(legal.y0).min(legal.y1);
        }
        self
    }

    /// Factory that produced this interpolator.
    #[must_use]
    pub fn kind(&self) -> InterpolatorKind {
        self.kind
    }

    /// Total duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        match &self.path {
            Path::Flight(flight) => flight.duration_ms,
            Path::Glide { duration_ms, .. } => *duration_ms,
        }
    }

    /// Pose at the start of the path.
    #[must_use]
    pub fn start(&self) -> CameraPose {
        match &self.path {
            Path::Flight(flight) => flight.from,
            Path::Glide { from, .. } => *from,
        }
    }

    /// Pose at the end of the path.
    #[must_use]
    pub fn target(&self) -> CameraPose {
        match &self.path {
            Path::Flight(flight) => flight.to,
            Path::Glide { to, .. } => *to,
        }
    }

    /// Pose after `elapsed_ms` milliseconds.
    #[must_use]
    pub fn at(&self, elapsed_ms: f64) -> CameraPose {
        let duration = self.duration_ms();
        if elapsed_ms >= duration {
            return self.target();
        }
        if elapsed_ms <= 0.0 || elapsed_ms.is_nan() {
            return self.start();
        }
        let t = elapsed_ms / duration;
        match &self.path {
            Path::Flight(flight) => flight.at(t),
            Path::Glide { from, to, .. } => {
                let u = ease_out_quad(t);
                CameraPose::new(
                    from.scale,
                    from.x + (to.x - from.x) * u,
                    from.y + (to.y - from.y) * u,
                )
            }
        }
    }
}

impl Flight {
    fn framing(camera: &Camera, rect: Rect, velocity: f64, pan_zoom: f64) -> Self {
        let view = camera.visual_size();
        let from = camera.pose();
        let to_scale = frame_scale(rect.size(), view).unwrap_or(from.scale);
        let to_center = rect.center();
        let to = CameraPose::centered_on(to_center, to_scale, view);
        let from_center = from.world_center(view);

        // Screen distance the pan covers at the starting zoom, plus the
        // zoom expressed as a sweep across the viewport.
        let pan_px = (to_center - from_center).hypot() * from.scale;
        let zoom_px = (to_scale / from.scale).ln().abs() * view.width.max(view.height);
        let travel = pan_px + zoom_px;
        let duration_ms = if velocity.is_finite() && velocity > 0.0 {
            (travel / velocity).clamp(MIN_NAVIGATION_MS, MAX_NAVIGATION_MS)
        } else {
            MAX_NAVIGATION_MS
        };

        let pan_zoom = if pan_zoom.is_finite() {
            pan_zoom.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self {
            from,
            to,
            view,
            from_center,
            to_center,
            bias: 2.0_f64.powf(1.0 - 2.0 * pan_zoom),
            duration_ms,
        }
    }

    fn at(&self, t: f64) -> CameraPose {
        let u = smoothstep(t);
        let pan_t = u.powf(self.bias);
        let zoom_t = u.powf(1.0 / self.bias);
        let center = self.from_center.lerp(self.to_center, pan_t);
        let scale = self.from.scale * (self.to.scale / self.from.scale).powf(zoom_t);
        CameraPose::centered_on(center, scale, self.view)
    }
}

/// Scale at which `size` fills [`FRAME_FILL`] of `view`, if it is framable.
fn frame_scale(size: Size, view: Size) -> Option<f64> {
    let fit_x = (size.width > 0.0).then(|| view.width / size.width);
    let fit_y = (size.height > 0.0).then(|| view.height / size.height);
    let fit = match (fit_x, fit_y) {
        (Some(x), Some(y)) => x.min(y),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => return None,
    };
    let scale = fit * FRAME_FILL;
    (scale.is_finite() && scale > 0.0).then(|| scale.clamp(MIN_SCALE, MAX_SCALE))
}

fn sanitize_duration(duration_ms: f64) -> f64 {
    if duration_ms.is_finite() {
        duration_ms.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use overlook_camera::{Camera, CameraPose};
    use overlook_view_model::{TreeError, ViewGroup, ViewItem, ViewTree};

    use super::{
        FLING_GAIN, FRAME_FILL, Interpolator, InterpolatorKind, MAX_NAVIGATION_MS,
        MIN_NAVIGATION_MS, NavigateTo,
    };

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn center_on_world_eases_out_at_constant_scale() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.zoom_and_move_to(2.0, 100.0, 50.0);
        let interp = Interpolator::center_on_world(300.0, 200.0, 250.0, &camera);

        assert_eq!(interp.kind(), InterpolatorKind::CenterOnWorld);
        assert_eq!(interp.at(0.0), camera.pose());
        let end = interp.at(250.0);
        assert_eq!(end, CameraPose::new(2.0, 200.0, 100.0));
        assert_eq!(interp.at(10_000.0), end);

        // Ease-out covers three quarters of the way at the halfway mark.
        let mid = interp.at(125.0);
        assert_eq!(mid.scale, 2.0);
        assert!(near(mid.x, 175.0));
        assert!(near(mid.y, 87.5));
    }

    #[test]
    fn throw_moves_against_the_drag() {
        let camera = Camera::new(800.0, 600.0);
        // Dragging right (angle 0) pulls the content right, so the pan offset decreases.
        let interp = Interpolator::throw_camera(&camera, 10.0, 0.0, 600.0);
        assert_eq!(interp.kind(), InterpolatorKind::Throw);
        let end = interp.at(600.0);
        assert!(near(end.x, -10.0 * FLING_GAIN));
        assert!(near(end.y, 0.0));
        assert_eq!(end.scale, 1.0);
    }

    #[test]
    fn clamped_throw_stops_at_the_legal_offset() {
        let camera = Camera::new(800.0, 600.0);
        // Dragging left throws the offset toward +x, past the legal 200.
        let interp = Interpolator::throw_camera(&camera, 20.0, core::f64::consts::PI, 600.0)
            .clamp_target(Rect::new(0.0, 0.0, 200.0, 400.0));
        assert_eq!(interp.target(), CameraPose::new(1.0, 200.0, 0.0));
        for step in 0..=12 {
            let pose = interp.at(f64::from(step) * 50.0);
            assert!(
                (0.0..=200.0).contains(&pose.x),
                "x left the legal range: {}",
                pose.x
            );
        }

        // Flights ignore the clamp.
        let flight = Interpolator::navigate_to(
            NavigateTo {
                target_x: 5000.0,
                target_y: 0.0,
                target_width: 400.0,
                velocity: 2.0,
                pan_zoom: 0.5,
            },
            &camera,
        );
        let target = flight.target();
        assert_eq!(flight.clamp_target(Rect::ZERO).target(), target);
    }

    #[test]
    fn navigate_to_item_frames_world_bounds() {
        let mut tree = ViewTree::new();
        let root = tree
            .insert_group(ViewGroup::new("root", (0.0, 0.0), (4000.0, 4000.0), 1.0))
            .unwrap();
        let item = tree.insert_item(ViewItem::new("stock", (1000.0, 500.0), (200.0, 100.0)));
        tree.add_content(root, item).unwrap();

        let camera = Camera::new(800.0, 600.0);
        let interp = Interpolator::navigate_to_item(&camera, 0.5, 2.0, &tree, item).unwrap();
        assert_eq!(interp.kind(), InterpolatorKind::NavigateToItem);
        assert_eq!(interp.at(0.0), camera.pose());

        let end = interp.at(interp.duration_ms());
        // 800 / 200 = 4 and 600 / 100 = 6; the narrower fit wins.
        assert!(near(end.scale, 4.0 * FRAME_FILL));
        let center = end.world_center(camera.visual_size());
        assert!((center - Point::new(1000.0, 500.0)).hypot() < 1e-9);

        let duration = interp.duration_ms();
        assert!((MIN_NAVIGATION_MS..=MAX_NAVIGATION_MS).contains(&duration));
    }

    #[test]
    fn navigate_to_item_reports_dead_vertices() {
        let mut tree = ViewTree::new();
        let item = tree.insert_item(ViewItem::new("gone", (0.0, 0.0), (1.0, 1.0)));
        tree.remove(item).unwrap();
        let camera = Camera::new(800.0, 600.0);
        assert_eq!(
            Interpolator::navigate_to_item(&camera, 0.5, 2.0, &tree, item),
            Err(TreeError::Dead(item))
        );
    }

    #[test]
    fn pan_zoom_preference_orders_the_blend() {
        let camera = Camera::new(800.0, 600.0);
        let params = NavigateTo {
            target_x: 2000.0,
            target_y: 300.0,
            target_width: 200.0,
            velocity: 2.0,
            pan_zoom: 1.0,
        };
        let pan_first = Interpolator::navigate_to(params, &camera);
        let zoom_first = Interpolator::navigate_to(
            NavigateTo {
                pan_zoom: 0.0,
                ..params
            },
            &camera,
        );
        assert_eq!(pan_first.kind(), InterpolatorKind::NavigateTo);
        assert_eq!(pan_first.target(), zoom_first.target());

        let view = camera.visual_size();
        let quarter = pan_first.duration_ms() * 0.25;
        let pan_led = pan_first.at(quarter);
        let zoom_led = zoom_first.at(quarter);
        // Pan-led flights have travelled further and zoomed less at the same instant.
        assert!(pan_led.world_center(view).x > zoom_led.world_center(view).x);
        assert!(pan_led.scale < zoom_led.scale);
    }

    #[test]
    fn duration_is_clamped() {
        let camera = Camera::new(800.0, 600.0);
        let tiny = Interpolator::navigate_to(
            NavigateTo {
                target_x: 400.0,
                target_y: 300.0,
                target_width: 800.0 / FRAME_FILL,
                velocity: 2.0,
                pan_zoom: 0.5,
            },
            &camera,
        );
        assert_eq!(tiny.duration_ms(), MIN_NAVIGATION_MS);

        let far = Interpolator::navigate_to(
            NavigateTo {
                target_x: 1e6,
                target_y: 0.0,
                target_width: 10.0,
                velocity: 2.0,
                pan_zoom: 0.5,
            },
            &camera,
        );
        assert_eq!(far.duration_ms(), MAX_NAVIGATION_MS);
    }
}
