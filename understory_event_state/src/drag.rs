// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: decide when a press becomes a drag, then compute
//! movement deltas and total offsets from position changes.
//!
//! ## Usage
//!
//! 1) Start tracking a press by calling [`DragState::start`] with the initial position.
//! 2) While the press is pending, call [`DragState::check_slop`] on each move to learn
//!    whether the pointer has travelled far enough along the drag axis
//!    ([`SlopCheck::Crossed`]), too far across it ([`SlopCheck::Vetoed`]), or neither.
//! 3) Once crossed, call [`DragState::activate`]. From then on [`DragState::update`]
//!    returns the movement delta since the last update and [`DragState::total_offset`]
//!    returns the cumulative offset from the press position.
//! 4) End the press with [`DragState::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragAxis, DragSlop, DragState, SlopCheck};
//!
//! let slop = DragSlop::new(DragAxis::Horizontal, 5.0, 6.0);
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//! assert!(!drag.is_active());
//!
//! // Mostly vertical movement abandons the press.
//! assert_eq!(drag.check_slop(Point::new(12.0, 27.0), slop), Some(SlopCheck::Vetoed));
//!
//! // Horizontal movement past the slop crosses it.
//! drag.start(Point::new(10.0, 20.0));
//! assert_eq!(
//!     drag.check_slop(Point::new(4.0, 21.0), slop),
//!     Some(SlopCheck::Crossed { along: -6.0 })
//! );
//! drag.activate();
//!
//! // Total offset from the press position.
//! let total = drag.total_offset(Point::new(0.0, 21.0)).unwrap();
//! assert_eq!(total.x, -10.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// The axis a drag is measured along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Drags move along X; Y is the cross axis.
    #[default]
    Horizontal,
    /// Drags move along Y; X is the cross axis.
    Vertical,
}

impl DragAxis {
    /// Component of `v` along this axis.
    #[must_use]
    pub fn along(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Component of `v` across this axis.
    #[must_use]
    pub fn across(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.y,
            Self::Vertical => v.x,
        }
    }
}

/// Distances a pointer has to travel before a press is classified.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSlop {
    /// Axis the drag is measured along.
    pub axis: DragAxis,
    /// Minimum absolute travel along the axis that turns the press into a drag.
    pub along: f64,
    /// Absolute travel across the axis that abandons the press before it becomes a drag.
    pub across: f64,
}

impl DragSlop {
    /// Creates a slop for the given axis and thresholds.
    #[must_use]
    pub const fn new(axis: DragAxis, along: f64, across: f64) -> Self {
        Self {
            axis,
            along,
            across,
        }
    }
}

/// Classification of a pending press against a [`DragSlop`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SlopCheck {
    /// Neither threshold has been reached.
    Pending,
    /// The pointer moved too far across the drag axis.
    Vetoed,
    /// The pointer moved far enough along the drag axis.
    Crossed {
        /// Signed travel along the axis from the press position.
        along: f64,
    },
}

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the press
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag
    pub last_pos: Option<Point>,
    active: bool,
}

impl DragState {
    /// Start tracking a new press from the given position.
    ///
    /// The press starts pending; call [`DragState::activate`] once it crosses the slop.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.active = false;
    }

    /// Classify a pending press at `pos` against `slop`.
    ///
    /// Cross-axis travel is checked first, so a sample that exceeds both
    /// thresholds at once is a veto. Returns `None` when no press is tracked.
    #[must_use]
    pub fn check_slop(&self, pos: Point, slop: DragSlop) -> Option<SlopCheck> {
        let offset = self.total_offset(pos)?;
        let along = slop.axis.along(offset);
        let across = slop.axis.across(offset);
        if across.abs() >= slop.across {
            Some(SlopCheck::Vetoed)
        } else if along.abs() < slop.along {
            Some(SlopCheck::Pending)
        } else {
            Some(SlopCheck::Crossed { along })
        }
    }

    /// Mark the tracked press as an active drag.
    ///
    /// Has no effect when no press is tracked.
    pub fn activate(&mut self) {
        self.active = self.start_pos.is_some();
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last_pos| pos - last_pos);
        self.last_pos = Some(pos);
        delta
    }

    /// Get total offset from the press position.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current press and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.active = false;
    }

    /// Returns `true` while a press is tracked, pending or active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the tracked press has been activated as a drag.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: DragSlop = DragSlop::new(DragAxis::Horizontal, 5.0, 6.0);

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(!drag.is_active());
        assert_eq!(drag.check_slop(Point::new(50.0, 0.0), SLOP), None);
    }

    #[test]
    fn start_is_pending_until_activated() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        assert!(drag.is_dragging());
        assert!(!drag.is_active());

        drag.activate();
        assert!(drag.is_active());
    }

    #[test]
    fn activate_without_press_is_ignored() {
        let mut drag = DragState::default();
        drag.activate();
        assert!(!drag.is_active());
    }

    #[test]
    fn small_movement_stays_pending() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));
        assert_eq!(
            drag.check_slop(Point::new(104.9, 105.9), SLOP),
            Some(SlopCheck::Pending)
        );
        assert_eq!(
            drag.check_slop(Point::new(95.1, 94.1), SLOP),
            Some(SlopCheck::Pending)
        );
    }

    #[test]
    fn crossing_reports_signed_travel() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));
        assert_eq!(
            drag.check_slop(Point::new(105.0, 100.0), SLOP),
            Some(SlopCheck::Crossed { along: 5.0 })
        );
        assert_eq!(
            drag.check_slop(Point::new(92.0, 103.0), SLOP),
            Some(SlopCheck::Crossed { along: -8.0 })
        );
    }

    #[test]
    fn cross_axis_veto_wins_over_crossing() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(
            drag.check_slop(Point::new(1.0, 6.0), SLOP),
            Some(SlopCheck::Vetoed)
        );
        assert_eq!(
            drag.check_slop(Point::new(20.0, -6.0), SLOP),
            Some(SlopCheck::Vetoed)
        );
    }

    #[test]
    fn vertical_axis_swaps_components() {
        let slop = DragSlop::new(DragAxis::Vertical, 5.0, 6.0);
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(
            drag.check_slop(Point::new(2.0, 7.0), slop),
            Some(SlopCheck::Crossed { along: 7.0 })
        );
        assert_eq!(
            drag.check_slop(Point::new(6.0, 1.0), slop),
            Some(SlopCheck::Vetoed)
        );
    }

    #[test]
    fn update_returns_delta_when_dragging() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));

        let new_pos = Point::new(15.0, 25.0);
        let delta = drag.update(new_pos);

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.last_pos, Some(new_pos));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(15.0, 25.0));

        assert_eq!(delta, None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.activate();
        drag.update(Point::new(15.0, 25.0));

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(!drag.is_active());
    }

    #[test]
    fn start_overwrites_previous_press() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.activate();

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start);

        assert_eq!(drag.start_pos, Some(new_start));
        assert!(!drag.is_active());
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
