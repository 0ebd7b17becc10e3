// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gesture tracker: turns one pointer stream into a horizontal drag of
//! the drawer panel.
//!
//! ## States
//!
//! - **Idle**: no session. A primary pointer-down arms a session; anything
//!   else is ignored. While a session exists, further pointer-downs are
//!   ignored.
//! - **Armed**: the press is recorded but has not crossed the drag threshold.
//!   Moves from the same pointer are classified with
//!   [`DragState::check_slop`]:
//!   - vertical travel past the veto ends the session (this is a scroll);
//!   - horizontal travel past the threshold that would push the drawer further
//!     in the direction it already rests (opening an open drawer, closing a
//!     closed one) keeps the session armed;
//!   - any other horizontal crossing starts the drag.
//! - **Dragging**: the panel follows the pointer 1:1. Each move is pushed to a
//!   [`PositionHistory`] and applied as a clamped live offset.
//!
//! Releasing a drag restores everything the drag changed and, when the
//! history window is full, reports the open state implied by the net
//! horizontal displacement across it.
//!
//! The tracker only drives the drag-time effects (live offset, transitions,
//! pointer capture, document style). Open-state changes and completion events
//! belong to [`Drawer`](crate::Drawer), which interprets the returned
//! [`Release`].

use kurbo::Point;
use understory_event_state::drag::{DragSlop, DragState, SlopCheck};
use understory_event_state::history::PositionHistory;

use crate::host::{DrawerHost, LiveOffset, PointerDisposition};
use crate::lease::StyleLease;

/// Current phase of the tracker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No pointer session.
    Idle,
    /// A press is recorded but has not become a drag.
    Armed,
    /// The panel follows the pointer.
    Dragging,
}

/// Drawer facts the tracker reads on every move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerGeometry {
    /// Whether the drawer is currently open.
    pub open: bool,
    /// Panel width; live offsets are clamped to `[0, width]`.
    pub width: f64,
    /// Offset the panel starts a drag from.
    pub start_offset: f64,
}

/// Result of ending a pointer session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Open state implied by the gesture, if it collected enough samples.
    pub decision: Option<bool>,
    /// Last live offset, if the session became a drag.
    pub end_offset: Option<f64>,
    /// Whether the click that follows this release should be ignored.
    pub suppress_click: bool,
}

impl Release {
    /// Returns `true` if the session became a drag.
    #[must_use]
    pub fn dragged(&self) -> bool {
        self.end_offset.is_some()
    }
}

#[derive(Debug)]
struct Session<P> {
    pointer: P,
    drag: DragState,
    history: PositionHistory,
    start_offset: f64,
    last_offset: f64,
    suppress_click: bool,
    // Present exactly while dragging.
    lease: Option<StyleLease>,
}

/// Pointer session state machine for one drawer.
#[derive(Debug)]
pub struct GestureTracker<P> {
    session: Option<Session<P>>,
    slop: DragSlop,
    history_len: usize,
}

impl<P: Copy + PartialEq + core::fmt::Debug> GestureTracker<P> {
    /// Creates an idle tracker.
    ///
    /// `history_len` is both the release window size and the number of drag
    /// samples required before a release decides the open state.
    #[must_use]
    pub fn new(slop: DragSlop, history_len: usize) -> Self {
        Self {
            session: None,
            slop,
            history_len: history_len.max(1),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.session {
            None => GesturePhase::Idle,
            Some(s) if s.drag.is_active() => GesturePhase::Dragging,
            Some(_) => GesturePhase::Armed,
        }
    }

    /// Returns `true` while the panel follows a pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::Dragging
    }

    /// Pointer driving the current session.
    #[must_use]
    pub fn pointer(&self) -> Option<P> {
        self.session.as_ref().map(|s| s.pointer)
    }

    /// Last live offset applied by the current drag.
    #[must_use]
    pub fn live_offset(&self) -> Option<f64> {
        self.session
            .as_ref()
            .filter(|s| s.drag.is_active())
            .map(|s| s.last_offset)
    }

    /// Handles a pointer press. Only primary presses arm a session.
    ///
    /// A press from another pointer while a session exists is ignored. A
    /// press from the session's own pointer means its release was lost: the
    /// old session is abandoned (restoring any drag effects) and the tracker
    /// re-arms at the new position.
    pub fn pointer_down(
        &mut self,
        pointer: P,
        primary: bool,
        pos: Point,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        if !primary {
            log::trace!("drawer: ignoring non-primary press from {pointer:?}");
            return PointerDisposition::Ignored;
        }
        if let Some(active) = &self.session {
            if active.pointer != pointer {
                log::trace!(
                    "drawer: ignoring press from {pointer:?}; {:?} already tracked",
                    active.pointer
                );
                return PointerDisposition::Ignored;
            }
            log::debug!("drawer: {pointer:?} pressed again without a release, re-arming");
            let _ = self.cancel(host);
        }
        let mut drag = DragState::default();
        drag.start(pos);
        self.session = Some(Session {
            pointer,
            drag,
            history: PositionHistory::new(self.history_len),
            start_offset: 0.0,
            last_offset: 0.0,
            suppress_click: false,
            lease: None,
        });
        PointerDisposition::Ignored
    }

    /// Handles a pointer move.
    ///
    /// `geometry` is read when the move starts a drag (open state and start
    /// offset) and on every drag move (width). Non-finite positions are
    /// ignored.
    pub fn pointer_move(
        &mut self,
        pointer: P,
        pos: Point,
        geometry: DrawerGeometry,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        if !pos.is_finite() {
            log::trace!("drawer: ignoring non-finite position from {pointer:?}");
            return PointerDisposition::Ignored;
        }
        let Some(session) = self.session.as_mut().filter(|s| s.pointer == pointer) else {
            return PointerDisposition::Ignored;
        };

        if !session.drag.is_active() {
            match session.drag.check_slop(pos, self.slop) {
                None | Some(SlopCheck::Pending) => return PointerDisposition::Ignored,
                Some(SlopCheck::Vetoed) => {
                    log::debug!("drawer: vertical movement, abandoning press from {pointer:?}");
                    self.session = None;
                    return PointerDisposition::Ignored;
                }
                Some(SlopCheck::Crossed { along }) => {
                    if geometry.open {
                        session.suppress_click = true;
                    }
                    if (geometry.open && along > 0.0) || (!geometry.open && along < 0.0) {
                        return PointerDisposition::Ignored;
                    }
                    session.drag.activate();
                    session.start_offset = geometry.start_offset;
                    host.set_transitions_suspended(true);
                    if !host.capture_pointer(pointer) {
                        log::trace!("drawer: pointer capture unavailable for {pointer:?}");
                    }
                    session.lease = Some(StyleLease::acquire(host));
                    log::debug!(
                        "drawer: drag started from offset {} (open: {})",
                        geometry.start_offset,
                        geometry.open
                    );
                }
            }
        }

        session.history.push(pos);
        let travel = session.drag.total_offset(pos).map_or(0.0, |v| v.x);
        let width = geometry.width;
        let offset = (session.start_offset + travel).clamp(0.0, width);
        session.last_offset = offset;
        session.drag.update(pos);
        log::trace!("drawer: live offset {offset}");
        host.set_live_offset(Some(LiveOffset {
            offset,
            progress: offset / width,
        }));
        PointerDisposition::Consumed
    }

    /// Handles a pointer release, ending the session.
    ///
    /// Returns `None` if `pointer` does not drive the current session.
    pub fn pointer_up(&mut self, pointer: P, host: &mut impl DrawerHost<P>) -> Option<Release> {
        if self.pointer() != Some(pointer) {
            return None;
        }
        let session = self.session.take()?;
        let full = session.history.len() >= self.history_len;
        let decision = if session.drag.is_active() && full {
            session.history.net_delta().map(|delta| delta.x > 0.0)
        } else {
            None
        };
        Some(Self::finish(session, decision, host))
    }

    /// Ends the current session without deciding an open state.
    ///
    /// Used for pointer-cancel and abnormal teardown. Returns `None` when idle.
    pub fn cancel(&mut self, host: &mut impl DrawerHost<P>) -> Option<Release> {
        let session = self.session.take()?;
        log::debug!("drawer: cancelling session for {:?}", session.pointer);
        let mut release = Self::finish(session, None, host);
        release.suppress_click = false;
        Some(release)
    }

    fn finish(
        session: Session<P>,
        decision: Option<bool>,
        host: &mut impl DrawerHost<P>,
    ) -> Release {
        let end_offset = if let Some(lease) = session.lease {
            host.set_live_offset(None);
            host.set_transitions_suspended(false);
            lease.release(host);
            Some(session.last_offset)
        } else {
            None
        };
        if let Some(open) = decision {
            log::debug!("drawer: drag released, settling {}", if open { "open" } else { "closed" });
        }
        Release {
            decision,
            end_offset,
            suppress_click: end_offset.is_some() || session.suppress_click,
        }
    }
}
