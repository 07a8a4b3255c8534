// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction states and the transitions between them.

use core::fmt;

use kurbo::Point;
use overlook_animation::{Animation, Interpolator};
use overlook_event_state::drag::DragState;
use overlook_view_model::VertexId;
use tracing::warn;

use crate::banding::BandEdges;
use crate::event::{InputEvent, Key};
use crate::stage::Stage;

/// Names of the interaction states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Waiting for input.
    Idle,
    /// Dragging the camera.
    Panning,
    /// Playing a camera animation.
    Animating,
    /// Reserved: drawing a shape.
    Drawing,
    /// Reserved: dragging diagram content.
    Dragging,
    /// Reserved: connecting two vertices.
    Connecting,
    /// Reserved: rubber-band selection.
    Selecting,
    /// Reserved: editing a vertex.
    Editing,
}

impl StateKind {
    /// Every state, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Idle,
        Self::Panning,
        Self::Animating,
        Self::Drawing,
        Self::Dragging,
        Self::Connecting,
        Self::Selecting,
        Self::Editing,
    ];

    /// Lowercase name, as accepted by [`StateKind::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning => "panning",
            Self::Animating => "animating",
            Self::Drawing => "drawing",
            Self::Dragging => "dragging",
            Self::Connecting => "connecting",
            Self::Selecting => "selecting",
            Self::Editing => "editing",
        }
    }

    /// Looks a state up by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A state to transition to, with the parameters it is entered with.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// Back to idle.
    Idle,
    /// Start dragging the camera from a press point.
    Panning {
        /// Screen position of the press.
        press: Point,
    },
    /// Play an animation.
    Animating {
        /// Path to play.
        interpolator: Interpolator,
        /// Refuse interruption by input and stop requests.
        forced: bool,
    },
    /// Drawing, from a press point.
    Drawing {
        /// Screen position of the press.
        press: Point,
    },
    /// Dragging content, from a press point.
    Dragging {
        /// Screen position of the press.
        press: Point,
    },
    /// Connecting vertices, from a press point.
    Connecting {
        /// Screen position of the press.
        press: Point,
    },
    /// Rubber-band selection, from a press point.
    Selecting {
        /// Screen position of the press.
        press: Point,
    },
    /// Editing.
    Editing,
}

impl Target {
    /// State this target enters.
    #[must_use]
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Panning { .. } => StateKind::Panning,
            Self::Animating { .. } => StateKind::Animating,
            Self::Drawing { .. } => StateKind::Drawing,
            Self::Dragging { .. } => StateKind::Dragging,
            Self::Connecting { .. } => StateKind::Connecting,
            Self::Selecting { .. } => StateKind::Selecting,
            Self::Editing => StateKind::Editing,
        }
    }

    /// Builds a target from a state name and loose parameters.
    ///
    /// Returns `None` for unknown names and for states whose required
    /// parameters are missing.
    #[must_use]
    pub fn from_name(name: &str, params: TargetParams) -> Option<Self> {
        let target = match StateKind::from_name(name)? {
            StateKind::Idle => Self::Idle,
            StateKind::Editing => Self::Editing,
            StateKind::Animating => Self::Animating {
                interpolator: params.interpolator?,
                forced: params.forced,
            },
            StateKind::Panning => Self::Panning {
                press: params.press?,
            },
            StateKind::Drawing => Self::Drawing {
                press: params.press?,
            },
            StateKind::Dragging => Self::Dragging {
                press: params.press?,
            },
            StateKind::Connecting => Self::Connecting {
                press: params.press?,
            },
            StateKind::Selecting => Self::Selecting {
                press: params.press?,
            },
        };
        Some(target)
    }
}

/// Loose parameters for [`Target::from_name`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetParams {
    /// Press point for gesture states.
    pub press: Option<Point>,
    /// Path for the animating state.
    pub interpolator: Option<Interpolator>,
    /// Whether an animation refuses interruption.
    pub forced: bool,
}

/// What a state asks the machine to do after handling an event.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The event had no effect here.
    Ignored,
    /// The event was handled in place.
    Consumed,
    /// Leave for another state.
    Goto(Target),
    /// Restart the current state with new parameters.
    Reenter(Target),
    /// Leave, then deliver the same event to the new state.
    GotoAndRedispatch(Target),
}

/// Lifecycle and input contract shared by all states.
pub(crate) trait InteractionState {
    fn kind(&self) -> StateKind;

    fn enter(&mut self, stage: &mut Stage) {
        let _ = stage;
    }

    fn leave(&mut self, stage: &mut Stage) {
        let _ = stage;
    }

    fn handle(&mut self, stage: &mut Stage, event: &InputEvent) -> Outcome {
        let _ = (stage, event);
        Outcome::Ignored
    }
}

#[derive(Debug, Default)]
pub(crate) struct Idle;

impl Idle {
    fn navigate(stage: &Stage, target: VertexId, forced: bool) -> Outcome {
        match stage.navigate_to_vertex(target) {
            Ok(interpolator) => Outcome::Goto(Target::Animating {
                interpolator,
                forced,
            }),
            Err(err) => {
                warn!(?target, %err, "cannot navigate");
                Outcome::Ignored
            }
        }
    }

    fn navigate_to_scope(stage: &Stage) -> Outcome {
        match stage.scope {
            Some(scope) => Self::navigate(stage, scope, false),
            None => Outcome::Ignored,
        }
    }
}

impl InteractionState for Idle {
    fn kind(&self) -> StateKind {
        StateKind::Idle
    }

    fn handle(&mut self, stage: &mut Stage, event: &InputEvent) -> Outcome {
        match *event {
            InputEvent::PointerDown { pos } => Outcome::Goto(Target::Panning { press: pos }),
            InputEvent::Wheel { pos, units } => {
                stage.zoom_at(pos, units);
                Outcome::Consumed
            }
            InputEvent::Click { pos, double: true } => Outcome::Goto(Target::Animating {
                interpolator: stage.navigate_to_point(pos),
                forced: false,
            }),
            InputEvent::Click { double: false, .. } | InputEvent::Key(Key::Home) => {
                Self::navigate_to_scope(stage)
            }
            InputEvent::Navigate { target, forced } => Self::navigate(stage, target, forced),
            InputEvent::Key(key @ (Key::ZoomIn | Key::ZoomOut)) => {
                let units = if key == Key::ZoomIn {
                    stage.config.key_zoom_units
                } else {
                    -stage.config.key_zoom_units
                };
                let size = stage.camera.visual_size();
                stage.zoom_at(Point::new(size.width * 0.5, size.height * 0.5), units);
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Panning {
    press: Point,
    drag: DragState,
    edges: BandEdges,
}

impl Panning {
    fn new(press: Point) -> Self {
        Self {
            press,
            drag: DragState::default(),
            edges: BandEdges::empty(),
        }
    }

    pub(crate) fn edges(&self) -> BandEdges {
        self.edges
    }

    fn drag_to(&mut self, stage: &mut Stage, pos: Point) {
        let Some(step) = self.drag.update(pos) else {
            return;
        };
        if stage.config.kinetics_enabled {
            stage.kinetics.update(step.x, step.y);
        }
        let (Some(total), Some(anchor)) = (self.drag.total_offset(pos), self.drag.anchor()) else {
            return;
        };
        self.edges = stage.pan_from(anchor, total);
    }

    fn release(&self, stage: &Stage) -> Outcome {
        if !self.edges.is_empty() {
            let center = stage.legal_center();
            let interpolator = Interpolator::center_on_world(
                center.x,
                center.y,
                stage.config.band_correction_ms,
                &stage.camera,
            );
            return Outcome::Goto(Target::Animating {
                interpolator,
                forced: false,
            });
        }
        if stage.config.kinetics_enabled && stage.kinetics.has_enough_momentum() {
            return Outcome::Goto(Target::Animating {
                interpolator: stage.fling(),
                forced: false,
            });
        }
        Outcome::Goto(Target::Idle)
    }
}

impl InteractionState for Panning {
    fn kind(&self) -> StateKind {
        StateKind::Panning
    }

    fn enter(&mut self, stage: &mut Stage) {
        let pan = Point::new(stage.camera.camera_x(), stage.camera.camera_y());
        self.drag.start(self.press, pan);
        self.edges = BandEdges::empty();
        stage.kinetics.reset();
    }

    fn leave(&mut self, stage: &mut Stage) {
        self.drag.end();
        stage.kinetics.reset();
    }

    fn handle(&mut self, stage: &mut Stage, event: &InputEvent) -> Outcome {
        match *event {
            InputEvent::PointerMove { pos } => {
                self.drag_to(stage, pos);
                Outcome::Consumed
            }
            InputEvent::PointerUp { pos } => {
                if self.drag.last_pos != Some(pos) {
                    self.drag_to(stage, pos);
                }
                self.release(stage)
            }
            _ if event.is_stop() => Outcome::Goto(Target::Idle),
            _ => Outcome::Ignored,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Animating {
    animation: Animation,
    forced: bool,
}

impl Animating {
    pub(crate) fn animation(&self) -> &Animation {
        &self.animation
    }

    pub(crate) fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub(crate) fn is_forced(&self) -> bool {
        self.forced
    }
}

impl InteractionState for Animating {
    fn kind(&self) -> StateKind {
        StateKind::Animating
    }

    fn enter(&mut self, stage: &mut Stage) {
        self.animation.play(stage.now_ms);
    }

    fn leave(&mut self, _stage: &mut Stage) {
        self.animation.stop();
    }

    fn handle(&mut self, stage: &mut Stage, event: &InputEvent) -> Outcome {
        if self.forced {
            return Outcome::Ignored;
        }
        match *event {
            InputEvent::PointerDown { pos } => Outcome::Goto(Target::Panning { press: pos }),
            InputEvent::Wheel { .. } => Outcome::GotoAndRedispatch(Target::Idle),
            InputEvent::Navigate { target, forced } => match stage.navigate_to_vertex(target) {
                Ok(interpolator) => Outcome::Reenter(Target::Animating {
                    interpolator,
                    forced,
                }),
                Err(err) => {
                    warn!(?target, %err, "cannot navigate");
                    Outcome::Ignored
                }
            },
            _ if event.is_stop() => Outcome::Goto(Target::Idle),
            _ => Outcome::Ignored,
        }
    }
}

/// Reserved pointer gestures. They hold the drag anchor and leave on stop.
#[derive(Debug)]
pub(crate) struct Gesture {
    kind: StateKind,
    press: Point,
    drag: DragState,
}

impl InteractionState for Gesture {
    fn kind(&self) -> StateKind {
        self.kind
    }

    fn enter(&mut self, stage: &mut Stage) {
        let pan = Point::new(stage.camera.camera_x(), stage.camera.camera_y());
        self.drag.start(self.press, pan);
    }

    fn leave(&mut self, _stage: &mut Stage) {
        self.drag.end();
    }

    fn handle(&mut self, _stage: &mut Stage, event: &InputEvent) -> Outcome {
        if event.is_stop() {
            Outcome::Goto(Target::Idle)
        } else {
            Outcome::Ignored
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Editing;

impl InteractionState for Editing {
    fn kind(&self) -> StateKind {
        StateKind::Editing
    }

    fn handle(&mut self, _stage: &mut Stage, event: &InputEvent) -> Outcome {
        if event.is_stop() {
            Outcome::Goto(Target::Idle)
        } else {
            Outcome::Ignored
        }
    }
}

/// The closed set of states the machine can be in.
#[derive(Debug)]
pub(crate) enum State {
    Idle(Idle),
    Panning(Panning),
    Animating(Animating),
    Gesture(Gesture),
    Editing(Editing),
}

impl From<Target> for State {
    fn from(target: Target) -> Self {
        let kind = target.kind();
        let gesture = |press| {
            Self::Gesture(Gesture {
                kind,
                press,
                drag: DragState::default(),
            })
        };
        match target {
            Target::Idle => Self::Idle(Idle),
            Target::Panning { press } => Self::Panning(Panning::new(press)),
            Target::Animating {
                interpolator,
                forced,
            } => Self::Animating(Animating {
                animation: Animation::new(interpolator),
                forced,
            }),
            Target::Drawing { press }
            | Target::Dragging { press }
            | Target::Connecting { press }
            | Target::Selecting { press } => gesture(press),
            Target::Editing => Self::Editing(Editing),
        }
    }
}

impl State {
    fn inner(&mut self) -> &mut dyn InteractionState {
        match self {
            Self::Idle(state) => state,
            Self::Panning(state) => state,
            Self::Animating(state) => state,
            Self::Gesture(state) => state,
            Self::Editing(state) => state,
        }
    }

    pub(crate) fn kind(&self) -> StateKind {
        match self {
            Self::Idle(state) => state.kind(),
            Self::Panning(state) => state.kind(),
            Self::Animating(state) => state.kind(),
            Self::Gesture(state) => state.kind(),
            Self::Editing(state) => state.kind(),
        }
    }

    pub(crate) fn enter(&mut self, stage: &mut Stage) {
        self.inner().enter(stage);
    }

    pub(crate) fn leave(&mut self, stage: &mut Stage) {
        self.inner().leave(stage);
    }

    pub(crate) fn handle(&mut self, stage: &mut Stage, event: &InputEvent) -> Outcome {
        self.inner().handle(stage, event)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{StateKind, Target, TargetParams};

    #[test]
    fn names_round_trip() {
        for kind in StateKind::ALL {
            assert_eq!(StateKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StateKind::from_name("Panning"), Some(StateKind::Panning));
        assert_eq!(StateKind::from_name("hovering"), None);
        assert_eq!(StateKind::Connecting.to_string(), "connecting");
    }

    #[test]
    fn targets_need_their_parameters() {
        assert_eq!(
            Target::from_name("idle", TargetParams::default()),
            Some(Target::Idle)
        );
        assert_eq!(Target::from_name("panning", TargetParams::default()), None);
        assert_eq!(
            Target::from_name("animating", TargetParams::default()),
            None
        );
        assert_eq!(Target::from_name("nowhere", TargetParams::default()), None);

        let press = Point::new(3.0, 4.0);
        let params = TargetParams {
            press: Some(press),
            ..TargetParams::default()
        };
        assert_eq!(
            Target::from_name("selecting", params),
            Some(Target::Selecting { press })
        );
    }
}
