// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for pointer interactions
//! that require stateful tracking across multiple events:
//!
//! - [`drag`]: Track a press that may become a drag, with an axis slop and a
//!   cross-axis veto, then movement deltas and total offsets once active
//! - [`history`]: Keep a short rolling window of recent pointer positions to
//!   estimate the direction of a gesture when it is released
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//!
//! The crate does not assume any particular UI framework or event system.
//! Managers accept raw pointer positions and produce queries that widgets can
//! interpret (for example, `overstory_drawer` builds its swipe gesture from
//! both modules).
//!
//! ## Usage Patterns
//!
//! ### Slop-gated drags
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::{DragAxis, DragSlop, DragState, SlopCheck};
//!
//! let slop = DragSlop::new(DragAxis::Horizontal, 5.0, 6.0);
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(100.0, 100.0));
//! assert_eq!(drag.check_slop(Point::new(103.0, 101.0), slop), Some(SlopCheck::Pending));
//! assert_eq!(
//!     drag.check_slop(Point::new(106.0, 101.0), slop),
//!     Some(SlopCheck::Crossed { along: 6.0 })
//! );
//! drag.activate();
//! assert!(drag.is_active());
//! # }
//! ```
//!
//! ### Release direction
//!
//! ```rust
//! # #[cfg(feature = "history")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::history::PositionHistory;
//!
//! let mut history = PositionHistory::new(3);
//! for x in [10.0, 20.0, 30.0, 25.0] {
//!     history.push(Point::new(x, 0.0));
//! }
//! // Only the newest three samples are kept: 20, 30, 25.
//! assert_eq!(history.net_delta().unwrap().x, 5.0);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `history`: Enable the rolling position window (requires `kurbo` and `smallvec`)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "history")]
pub mod history;
