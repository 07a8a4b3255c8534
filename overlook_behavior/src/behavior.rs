// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::mem;

use kurbo::Rect;
use overlook_animation::{Animation, Tick};
use overlook_camera::{Camera, CameraDebugInfo, CameraObserver, ObserverId};
use overlook_event_state::kinetics::Kinetics;
use overlook_view_model::{TreeError, VertexId, ViewTree};
use tracing::{debug, warn};

use crate::banding::{self, BandEdges};
use crate::config::BehaviorConfig;
use crate::event::InputEvent;
use crate::stage::Stage;
use crate::state::{Idle, Outcome, State, StateKind, Target, TargetParams};

/// The interaction state machine.
///
/// A `Behavior` owns the [`Camera`], the [`ViewTree`] it frames and the drag
/// [`Kinetics`]. Input goes in through [`Behavior::handle`]; the host frame
/// clock drives animations through [`Behavior::tick`]. Both take the host
/// time in milliseconds, which is also the clock animations start from.
///
/// Exactly one state is current at any time, starting with
/// [`StateKind::Idle`].
#[derive(Debug)]
pub struct Behavior {
    stage: Stage,
    state: State,
    last: Option<StateKind>,
}

impl Behavior {
    /// Creates an idle machine around `camera` and `tree`.
    #[must_use]
    pub fn new(camera: Camera, tree: ViewTree, config: BehaviorConfig) -> Self {
        Self {
            stage: Stage::new(camera, tree, config),
            state: State::Idle(Idle),
            last: None,
        }
    }

    /// Delivers one input event at host time `now_ms`.
    ///
    /// Returns `true` if the event had an effect.
    pub fn handle(&mut self, event: InputEvent, now_ms: f64) -> bool {
        self.stage.now_ms = now_ms;
        if event == InputEvent::Abort {
            if self.state.kind() != StateKind::Idle {
                self.goto(Target::Idle);
            }
            return true;
        }
        self.dispatch(&event, true)
    }

    /// Advances the running animation to host time `now_ms`.
    ///
    /// Returns to idle when the animation completes.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        self.stage.now_ms = now_ms;
        let State::Animating(animating) = &mut self.state else {
            return Tick::Idle;
        };
        let tick = animating
            .animation_mut()
            .tick(&mut self.stage.camera, now_ms);
        if tick == Tick::Finished {
            self.goto(Target::Idle);
        }
        tick
    }

    /// Requests navigation to `target`, as [`InputEvent::Navigate`] would.
    pub fn navigate_to(&mut self, target: VertexId, forced: bool, now_ms: f64) -> bool {
        self.handle(InputEvent::Navigate { target, forced }, now_ms)
    }

    /// Leaves the current state and enters `target`.
    ///
    /// The outgoing state is swapped out before its cleanup runs, so the
    /// machine is never observed half-way between two states.
    pub fn goto(&mut self, target: Target) {
        let mut previous = mem::replace(&mut self.state, State::Idle(Idle));
        previous.leave(&mut self.stage);
        let from = previous.kind();
        self.last = Some(from);
        self.install(target);
        debug!(%from, to = %self.state.kind(), "state transition");
    }

    /// Restarts the current state with new parameters, leaving `last` untouched.
    ///
    /// Returns `false`, doing nothing, if `target` is a different state.
    pub fn reenter(&mut self, target: Target) -> bool {
        let current = self.state.kind();
        if target.kind() != current {
            debug!(%current, target = %target.kind(), "reenter ignored");
            return false;
        }
        let mut previous = mem::replace(&mut self.state, State::Idle(Idle));
        previous.leave(&mut self.stage);
        self.install(target);
        debug!(state = %current, "state reentered");
        true
    }

    /// [`Behavior::goto`] by state name.
    ///
    /// Unknown names and missing parameters are ignored. Returns whether a
    /// transition happened.
    pub fn goto_named(&mut self, name: &str, params: TargetParams) -> bool {
        match Target::from_name(name, params) {
            Some(target) => {
                self.goto(target);
                true
            }
            None => {
                debug!(name, "no such state, or missing parameters");
                false
            }
        }
    }

    /// Selects the group framed by single clicks and the Home key.
    ///
    /// With [`BehaviorConfig::limits_from_scope`], limits follow the scope's
    /// world bounds inflated by [`BehaviorConfig::scope_overscroll`].
    pub fn set_scope(&mut self, scope: Option<VertexId>) -> Result<(), TreeError> {
        let Some(id) = scope else {
            self.stage.scope = None;
            return Ok(());
        };
        let bounds = self.stage.tree.world_bounds(id)?;
        self.stage.scope = Some(id);
        if self.stage.config.limits_from_scope {
            let limits = banding::limits_around(bounds, self.stage.config.scope_overscroll);
            self.set_limits(Some(limits));
        }
        Ok(())
    }

    /// Current scope.
    #[must_use]
    pub fn scope(&self) -> Option<VertexId> {
        self.stage.scope
    }

    /// Sets the world rectangle panning and zoom are bounded by.
    ///
    /// Empty or non-finite rectangles are ignored.
    pub fn set_limits(&mut self, limits: Option<Rect>) {
        if let Some(rect) = limits {
            let usable = rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0;
            if !usable {
                warn!(?rect, "ignoring degenerate limits");
                return;
            }
        }
        self.stage.limits = limits;
    }

    /// Current limits rectangle.
    #[must_use]
    pub fn limits(&self) -> Option<Rect> {
        self.stage.limits
    }

    /// Resizes the camera's viewport.
    pub fn resize_view(&mut self, width: f64, height: f64) {
        self.stage.camera.resize(width, height);
    }

    /// Registers a camera observer.
    pub fn attach_camera_observer(&mut self, observer: Box<dyn CameraObserver>) -> ObserverId {
        self.stage.camera.attach_observer(observer)
    }

    /// Unregisters a camera observer, handing it back.
    pub fn detach_camera_observer(&mut self, id: ObserverId) -> Option<Box<dyn CameraObserver>> {
        self.stage.camera.detach_observer(id)
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.stage.camera
    }

    /// The view-model tree.
    #[must_use]
    pub fn tree(&self) -> &ViewTree {
        &self.stage.tree
    }

    /// Mutable access to the view-model tree.
    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.stage.tree
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &BehaviorConfig {
        &self.stage.config
    }

    /// Drag kinetics of the current pan.
    #[must_use]
    pub fn kinetics(&self) -> &Kinetics {
        &self.stage.kinetics
    }

    /// Kind of the current state.
    #[must_use]
    pub fn current_kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Kind of the state left by the most recent [`Behavior::goto`].
    #[must_use]
    pub fn last(&self) -> Option<StateKind> {
        self.last
    }

    /// Limit edges the current pan has pushed past; empty outside panning.
    #[must_use]
    pub fn band_edges(&self) -> BandEdges {
        match &self.state {
            State::Panning(panning) => panning.edges(),
            _ => BandEdges::empty(),
        }
    }

    /// The running animation, while animating.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        match &self.state {
            State::Animating(animating) => Some(animating.animation()),
            _ => None,
        }
    }

    /// Whether the current animation refuses interruption.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        matches!(&self.state, State::Animating(animating) if animating.is_forced())
    }

    /// Snapshot of the machine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> BehaviorDebugInfo {
        BehaviorDebugInfo {
            state: self.state.kind(),
            last: self.last,
            camera: self.stage.camera.debug_info(),
            limits: self.stage.limits,
            scope: self.stage.scope,
        }
    }

    fn install(&mut self, target: Target) {
        self.state = State::from(target);
        self.state.enter(&mut self.stage);
    }

    fn dispatch(&mut self, event: &InputEvent, redispatch: bool) -> bool {
        match self.state.handle(&mut self.stage, event) {
            Outcome::Ignored => {
                debug!(state = %self.state.kind(), ?event, "event ignored");
                false
            }
            Outcome::Consumed => true,
            Outcome::Goto(target) => {
                self.goto(target);
                true
            }
            Outcome::Reenter(target) => {
                self.reenter(target);
                true
            }
            Outcome::GotoAndRedispatch(target) => {
                self.goto(target);
                if redispatch {
                    self.dispatch(event, false);
                }
                true
            }
        }
    }
}

/// Debug snapshot of a [`Behavior`].
#[derive(Clone, Copy, Debug)]
pub struct BehaviorDebugInfo {
    /// Current state.
    pub state: StateKind,
    /// State left most recently.
    pub last: Option<StateKind>,
    /// Camera snapshot.
    pub camera: CameraDebugInfo,
    /// Limits rectangle.
    pub limits: Option<Rect>,
    /// Current scope.
    pub scope: Option<VertexId>,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use overlook_animation::{Interpolator, InterpolatorKind, Tick};
    use overlook_camera::Camera;
    use overlook_view_model::{ViewGroup, ViewItem, ViewTree};

    use super::Behavior;
    use crate::{BehaviorConfig, InputEvent, Key, StateKind, Target, TargetParams};

    fn behavior() -> Behavior {
        Behavior::new(
            Camera::new(800.0, 600.0),
            ViewTree::new(),
            BehaviorConfig::default(),
        )
    }

    #[test]
    fn starts_idle_and_tracks_last() {
        let mut b = behavior();
        assert_eq!(b.current_kind(), StateKind::Idle);
        assert_eq!(b.last(), None);

        let pos = Point::new(10.0, 10.0);
        assert!(b.handle(InputEvent::PointerDown { pos }, 0.0));
        assert_eq!(b.current_kind(), StateKind::Panning);
        assert_eq!(b.last(), Some(StateKind::Idle));

        assert!(b.handle(InputEvent::Key(Key::Escape), 1.0));
        assert_eq!(b.current_kind(), StateKind::Idle);
        assert_eq!(b.last(), Some(StateKind::Panning));
    }

    #[test]
    fn goto_named_ignores_unknown_and_incomplete_targets() {
        let mut b = behavior();
        assert!(!b.goto_named("hovering", TargetParams::default()));
        assert!(!b.goto_named("panning", TargetParams::default()));
        assert_eq!(b.current_kind(), StateKind::Idle);
        assert_eq!(b.last(), None);

        assert!(b.goto_named("editing", TargetParams::default()));
        assert_eq!(b.current_kind(), StateKind::Editing);
        assert!(b.handle(InputEvent::Stop, 0.0));
        assert_eq!(b.current_kind(), StateKind::Idle);
    }

    #[test]
    fn placeholders_leave_only_on_stop_or_abort() {
        let mut b = behavior();
        b.goto(Target::Connecting { press: Point::ZERO });
        let wheel = InputEvent::Wheel {
            pos: Point::ZERO,
            units: 10.0,
        };
        assert!(!b.handle(wheel, 0.0));
        assert_eq!(b.current_kind(), StateKind::Connecting);
        assert_eq!(b.camera().scale(), 1.0);
        assert!(b.handle(InputEvent::Abort, 0.0));
        assert_eq!(b.current_kind(), StateKind::Idle);
    }

    #[test]
    fn reenter_rejects_other_states() {
        let mut b = behavior();
        assert!(!b.reenter(Target::Panning { press: Point::ZERO }));
        assert!(b.reenter(Target::Idle));
        assert_eq!(b.last(), None);
    }

    #[test]
    fn key_zoom_is_centered() {
        let mut b = behavior();
        let before = b.camera().world_center();
        assert!(b.handle(InputEvent::Key(Key::ZoomIn), 0.0));
        assert!(b.camera().scale() > 1.0);
        let after = b.camera().world_center();
        assert!((after - before).hypot() < 1e-9);

        assert!(b.handle(InputEvent::Key(Key::ZoomOut), 0.0));
        assert!((b.camera().scale() - 1.0).abs() < 1e-12);
        assert!(!b.handle(InputEvent::Key(Key::Other), 0.0));
    }

    #[test]
    fn scope_drives_single_click_home_and_limits() {
        let mut tree = ViewTree::new();
        let root = tree
            .insert_group(ViewGroup::new("model", (0.0, 0.0), (2000.0, 1000.0), 1.0))
            .unwrap();
        let item = tree.insert_item(ViewItem::new("stock", (100.0, 100.0), (50.0, 50.0)));
        tree.add_content(root, item).unwrap();
        let mut b = Behavior::new(Camera::new(800.0, 600.0), tree, BehaviorConfig::default());

        // No scope: single clicks do nothing.
        let click = InputEvent::Click {
            pos: Point::ZERO,
            double: false,
        };
        assert!(!b.handle(click, 0.0));

        b.set_scope(Some(root)).unwrap();
        let limits = b.limits().unwrap();
        // 90% of the 2000-wide group on either side.
        assert_eq!(limits.width(), 5600.0);

        assert!(b.handle(InputEvent::Key(Key::Home), 0.0));
        assert_eq!(b.current_kind(), StateKind::Animating);
        let kind = b.animation().map(|a| a.kind());
        assert_eq!(kind, Some(InterpolatorKind::NavigateToItem));

        let dead = b
            .tree_mut()
            .insert_item(ViewItem::new("gone", (0.0, 0.0), (1.0, 1.0)));
        b.tree_mut().remove(dead).unwrap();
        assert!(b.set_scope(Some(dead)).is_err());
        assert_eq!(b.scope(), Some(root));
    }

    #[test]
    fn tick_finishes_into_idle() {
        let mut b = behavior();
        let interpolator = Interpolator::center_on_world(1000.0, 1000.0, 100.0, b.camera());
        b.goto(Target::Animating {
            interpolator,
            forced: false,
        });
        assert_eq!(b.tick(50.0), Tick::Running);
        assert_eq!(b.tick(100.0), Tick::Finished);
        assert_eq!(b.current_kind(), StateKind::Idle);
        assert_eq!(b.camera().world_center(), Point::new(1000.0, 1000.0));
        assert_eq!(b.tick(150.0), Tick::Idle);
    }
}
