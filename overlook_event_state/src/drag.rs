// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor: remember where a drag began and where the camera was at that moment.
//!
//! ## Usage
//!
//! 1) On press, call [`DragState::start`] with the pointer position and the
//!    camera pan offset at that instant.
//! 2) On each move, call [`DragState::update`] to get the step since the
//!    previous event (feed this to kinetics).
//! 3) Use [`DragState::total_offset`] with [`DragState::anchor`] to place the
//!    camera relative to where it was at press time, which avoids drift from
//!    accumulated per-step rounding.
//! 4) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overlook_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (10, 20) while the camera sits at pan (100, 0).
//! drag.start(Point::new(10.0, 20.0), Point::new(100.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25): step and total are both (5, 5).
//! let step = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((step.x, step.y), (5.0, 5.0));
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((total.x, total.y), (5.0, 5.0));
//!
//! // Content follows the pointer, so the camera pan moves the other way.
//! let anchor = drag.anchor().unwrap();
//! assert_eq!(anchor.x - total.x, 95.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag gesture from press to release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position at press, in screen pixels.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    /// Camera pan offset captured at press.
    pub anchor: Option<Point>,
}

impl DragState {
    /// Begin a drag at `pos`, remembering the camera pan `anchor`.
    ///
    /// Any drag already in progress is replaced.
    pub fn start(&mut self, pos: Point, anchor: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.anchor = Some(anchor);
    }

    /// Record a new pointer position, returning the step since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current_pos` from the press position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Camera pan offset captured at press.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// End the drag and clear all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.anchor().is_none());
    }

    #[test]
    fn start_records_press_and_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), Point::new(-3.0, 4.0));

        assert_eq!(drag.start_pos, Some(Point::new(10.0, 20.0)));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(drag.anchor(), Some(Point::new(-3.0, 4.0)));
    }

    #[test]
    fn steps_are_incremental_and_total_is_from_press() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, Point::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.update(Point::new(6.0, 7.0)),
            Some(Vec2::new(-2.0, 0.0))
        );
        assert_eq!(
            drag.total_offset(Point::new(6.0, 7.0)),
            Some(Vec2::new(6.0, 7.0))
        );
    }

    #[test]
    fn update_without_press_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn missing_last_position_yields_no_step_but_recovers() {
        let mut drag = DragState {
            start_pos: Some(Point::new(10.0, 20.0)),
            last_pos: None,
            anchor: None,
        };
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert_eq!(
            drag.update(Point::new(16.0, 25.0)),
            Some(Vec2::new(1.0, 0.0))
        );
    }

    #[test]
    fn end_clears_everything() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        drag.update(Point::new(5.0, 6.0));
        drag.end();

        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
        assert!(drag.anchor().is_none());
    }

    #[test]
    fn restart_replaces_previous_gesture() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, Point::ZERO);
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0), Point::new(7.0, 7.0));
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
        assert_eq!(drag.anchor(), Some(Point::new(7.0, 7.0)));
    }
}
