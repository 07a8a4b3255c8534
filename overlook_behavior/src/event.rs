// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use overlook_view_model::VertexId;

/// Keys the interaction layer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Cancel the current gesture or animation.
    Escape,
    /// Fly back to the current scope.
    Home,
    /// Zoom in about the viewport center.
    ZoomIn,
    /// Zoom out about the viewport center.
    ZoomOut,
    /// Any other key; ignored.
    Other,
}

impl Key {
    /// Maps a typed character to a key (`+`/`=` zoom in, `-`/`_` zoom out).
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            '+' | '=' => Self::ZoomIn,
            '-' | '_' => Self::ZoomOut,
            _ => Self::Other,
        }
    }
}

/// Input delivered to a [`Behavior`](crate::Behavior).
///
/// Positions are in screen pixels relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary button released.
    PointerUp {
        /// Pointer position.
        pos: Point,
    },
    /// Wheel or pinch; positive units zoom in.
    Wheel {
        /// Pointer position the zoom is anchored at.
        pos: Point,
        /// Signed zoom amount.
        units: f64,
    },
    /// Click without a drag in between.
    Click {
        /// Pointer position.
        pos: Point,
        /// Whether this is the second click of a double-click.
        double: bool,
    },
    /// Key press.
    Key(Key),
    /// Host demand to return to idle, honored in every state.
    Abort,
    /// Host request to return to idle; forced animations refuse it.
    Stop,
    /// Request to fly to a view-model vertex.
    Navigate {
        /// Vertex to frame.
        target: VertexId,
        /// Whether the resulting animation refuses interruption.
        forced: bool,
    },
}

impl InputEvent {
    /// Whether this event asks to leave the current state (stop or Escape).
    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop | Self::Key(Key::Escape))
    }
}
