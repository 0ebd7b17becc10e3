// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position history: a short rolling window of recent pointer positions.
//!
//! Gestures that commit on release (swipes, flings, drawer dismissal) often only
//! need a coarse idea of where the pointer was heading when it let go.
//! [`PositionHistory`] keeps the most recent `capacity` positions, evicting the
//! oldest first, and reports the net displacement across the window.
//!
//! Comparing the newest sample against the oldest retained one is deliberately
//! cheap: no timestamps are needed, and a short wiggle at the very end of a
//! gesture does not change the answer as long as the displacement across the
//! whole window keeps its sign.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::history::PositionHistory;
//!
//! let mut history = PositionHistory::new(5);
//! for x in [0.0, 10.0, 20.0, 30.0, 28.0] {
//!     history.push(Point::new(x, 0.0));
//! }
//! assert!(history.is_full());
//! assert_eq!(history.net_delta().unwrap().x, 28.0);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Default window size used by drawer-style swipe gestures.
pub const DEFAULT_CAPACITY: usize = 5;

/// A bounded, oldest-first window of pointer positions.
#[derive(Clone, Debug)]
pub struct PositionHistory {
    samples: SmallVec<[Point; 8]>,
    capacity: usize,
}

impl Default for PositionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PositionHistory {
    /// Creates an empty history that retains at most `capacity` positions.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of retained positions.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no positions are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` once the window holds `capacity` positions.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Appends a position, evicting the oldest one if the window is full.
    pub fn push(&mut self, pos: Point) {
        if self.is_full() {
            self.samples.remove(0);
        }
        self.samples.push(pos);
    }

    /// Oldest retained position.
    #[must_use]
    pub fn oldest(&self) -> Option<Point> {
        self.samples.first().copied()
    }

    /// Most recent position.
    #[must_use]
    pub fn newest(&self) -> Option<Point> {
        self.samples.last().copied()
    }

    /// Displacement from the oldest retained position to the newest.
    ///
    /// Returns `None` when the history is empty.
    #[must_use]
    pub fn net_delta(&self) -> Option<Vec2> {
        Some(self.newest()? - self.oldest()?)
    }

    /// Retained positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().copied()
    }

    /// Drops every retained position.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
