// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The kernels beneath the drawer gesture.
//!
//! Classify a press with `DragState::check_slop`, collect a release window in
//! `PositionHistory`, and defer work with `TimerQueue`.
//!
//! Run:
//! - `cargo run -p understory_demos --example gesture_kernels`

use kurbo::Point;
use understory_event_state::drag::{DragAxis, DragSlop, DragState, SlopCheck};
use understory_event_state::history::PositionHistory;
use understory_timing::TimerQueue;

fn main() {
    understory_demos::init_logging();

    let slop = DragSlop::new(DragAxis::Horizontal, 5.0, 6.0);

    println!("== Slop classification ==");
    let mut drag = DragState::default();
    drag.start(Point::new(100.0, 100.0));
    for pos in [
        Point::new(103.0, 102.0),
        Point::new(104.0, 107.0),
        Point::new(108.0, 101.0),
    ] {
        println!("  {pos:?} -> {:?}", drag.check_slop(pos, slop));
    }
    assert_eq!(
        drag.check_slop(Point::new(104.0, 107.0), slop),
        Some(SlopCheck::Vetoed)
    );

    println!("== Release window ==");
    let mut history = PositionHistory::new(5);
    for x in [110.0, 140.0, 170.0, 200.0, 195.0, 190.0] {
        history.push(Point::new(x, 100.0));
        println!("  push {x:>5.1}  net {:?}", history.net_delta());
    }
    let net = history.net_delta().map_or(0.0, |d| d.x);
    assert!(net > 0.0, "a short wiggle keeps the swipe direction");

    println!("== Deferred work ==");
    let mut timers = TimerQueue::new();
    let first = timers.schedule(1_000, "close");
    timers.schedule(1_000, "refresh");
    timers.cancel(first);
    for (id, action) in timers.drain_due(1_000) {
        println!("  fired {:?}: {action}", id.get());
    }
    assert!(timers.is_empty());
}
