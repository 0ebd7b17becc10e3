// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Drawer: a headless slide-in panel (`<app-drawer>`).
//!
//! The drawer owns three pieces of behavior:
//!
//! - **Open state.** [`Drawer::set_open`], [`Drawer::toggle`] and
//!   [`Drawer::close`] change the state and reflect the `open` attribute. A
//!   non-bubbling [`ToggleEvent`] follows once the panel has settled, which
//!   the host reports through [`Drawer::transition_end`].
//! - **Swipe gestures.** Pointer input drives a [`GestureTracker`]. A
//!   horizontal drag moves the panel 1:1 with the pointer; on release the net
//!   direction over the last few samples decides whether it settles open or
//!   closed. Vertical movement before the drag threshold is left to scrolling.
//! - **Autoclose.** Clicks inside the drawer close it on the next tick, unless
//!   the nearest element carrying an `autoclose` attribute says `"false"`.
//!   Clicks trailing a gesture release are ignored.
//!
//! The drawer never touches a document directly. Every effect goes through a
//! [`DrawerHost`]; [`RecordingHost`] is an in-memory implementation for tests
//! and headless use.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use overstory_drawer::{
//!     ClickResolution, Drawer, DrawerConfig, DrawerPointerEvent, RecordingHost, TransitionTarget,
//! };
//!
//! let config = DrawerConfig::builder().autoclose(true).build().unwrap();
//! let mut drawer = Drawer::<u32>::new(config);
//! let mut host = RecordingHost::new();
//! drawer.connect(&mut host);
//!
//! // Swipe open from the left edge.
//! let mut now = 0;
//! drawer.handle_pointer(
//!     DrawerPointerEvent::Down { pointer: 1, primary: true, position: Point::new(2.0, 300.0) },
//!     now,
//!     &mut host,
//! );
//! for x in [20.0, 50.0, 90.0, 130.0, 170.0] {
//!     now += 16;
//!     drawer.handle_pointer(
//!         DrawerPointerEvent::Move { pointer: 1, position: Point::new(x, 300.0) },
//!         now,
//!         &mut host,
//!     );
//! }
//! drawer.handle_pointer(DrawerPointerEvent::Up { pointer: 1 }, now, &mut host);
//! assert!(drawer.open());
//!
//! drawer.transition_end(TransitionTarget::Panel, &mut host);
//! assert_eq!(host.toggles().last().map(|t| t.open), Some(true));
//!
//! // A click on plain content closes it on the next tick.
//! now += 500;
//! assert_eq!(drawer.click([None], now), ClickResolution::CloseScheduled);
//! drawer.run_timers(now + 1, &mut host);
//! assert!(!drawer.open());
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: feed `ui_events::pointer::PointerEvent` values
//!   straight into a drawer keyed by `ui_events` pointer ids.

extern crate alloc;

pub mod adapters;
pub mod attributes;
pub mod autoclose;
pub mod config;
mod drawer;
pub mod gesture;
pub mod host;
pub mod lease;
pub mod template;

pub use attributes::{Align, DrawerFlags};
pub use autoclose::AutocloseLookup;
pub use config::{ConfigError, DrawerConfig, DrawerConfigBuilder};
pub use drawer::{ClickResolution, Drawer, DrawerPointerEvent};
pub use gesture::{GesturePhase, GestureTracker, Release};
pub use host::{
    DocumentStyle, DrawerHost, HostEffect, LiveOffset, PointerDisposition, RecordingHost,
    ToggleEvent, TransitionTarget,
};
pub use lease::StyleLease;
pub use template::{DrawerTemplate, Placement};
