// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer widget.

use kurbo::Point;
use understory_timing::{TimerId, TimerQueue};

use crate::attributes::{Align, DrawerFlags};
use crate::autoclose::{self, AutocloseLookup};
use crate::config::{DrawerConfig, is_valid_width};
use crate::gesture::{DrawerGeometry, GesturePhase, GestureTracker, Release};
use crate::host::{DrawerHost, PointerDisposition, ToggleEvent, TransitionTarget};
use crate::template::{DrawerTemplate, Placement};

/// Offsets closer than this are treated as equal.
const OFFSET_EPSILON: f64 = 1e-6;

/// Work deferred to a later tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Deferred {
    Close,
}

/// Pointer input accepted by [`Drawer::handle_pointer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawerPointerEvent<P> {
    /// A button was pressed.
    Down {
        /// Pointer identifier.
        pointer: P,
        /// Whether the primary button was pressed.
        primary: bool,
        /// Position in page coordinates.
        position: Point,
    },
    /// The pointer moved.
    Move {
        /// Pointer identifier.
        pointer: P,
        /// Position in page coordinates.
        position: Point,
    },
    /// The button was released.
    Up {
        /// Pointer identifier.
        pointer: P,
    },
    /// The platform took the pointer away.
    Cancel {
        /// Pointer identifier.
        pointer: P,
    },
}

/// What a click inside the drawer resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResolution {
    /// The click trails a gesture release and was ignored.
    Suppressed,
    /// Autoclose is disabled for the clicked element.
    KeptOpen,
    /// A close was scheduled for the next tick.
    CloseScheduled,
}

/// A slide-in drawer: open state, swipe gestures and autoclose routing.
///
/// `P` is the host's pointer identifier type. All timestamps are host
/// wall-clock milliseconds.
///
/// ```
/// use kurbo::Point;
/// use overstory_drawer::{Drawer, DrawerConfig, RecordingHost, TransitionTarget};
///
/// let mut host = RecordingHost::new();
/// let mut drawer = Drawer::<u32>::new(DrawerConfig::default());
///
/// drawer.set_open(true, &mut host);
/// assert!(drawer.animating());
/// drawer.transition_end(TransitionTarget::Panel, &mut host);
/// assert!(!drawer.animating());
/// assert_eq!(host.toggles().last().map(|t| t.open), Some(true));
///
/// // Swipe it closed.
/// drawer.pointer_down(7, true, Point::new(150.0, 40.0), &mut host);
/// for x in [140.0, 120.0, 100.0, 80.0, 60.0] {
///     drawer.pointer_move(7, Point::new(x, 40.0), &mut host);
/// }
/// drawer.pointer_up(7, 1_000, &mut host);
/// assert!(!drawer.open());
/// ```
#[derive(Debug)]
pub struct Drawer<P> {
    config: DrawerConfig,
    flags: DrawerFlags,
    align: Align,
    width: f64,
    animating: bool,
    // Open state the panel last came to rest in.
    settled_open: bool,
    gesture: GestureTracker<P>,
    timers: TimerQueue<Deferred>,
    pending_close: Option<TimerId>,
    last_release: Option<u64>,
    template: DrawerTemplate,
}

impl<P: Copy + PartialEq + core::fmt::Debug> Drawer<P> {
    /// Creates a closed drawer.
    #[must_use]
    pub fn new(config: DrawerConfig) -> Self {
        let mut flags = DrawerFlags::empty();
        flags.set(DrawerFlags::AUTOCLOSE, config.autoclose());
        Self::upgrade(config, flags, None)
    }

    /// Creates a drawer for an element that already carries attributes.
    ///
    /// The drawer starts at rest in the state `flags` describes, without an
    /// animation. A missing `align` value uses the configured alignment;
    /// malformed values fall back to [`Align::Left`].
    #[must_use]
    pub fn upgrade(config: DrawerConfig, flags: DrawerFlags, align: Option<&str>) -> Self {
        let align = align.map_or(config.align(), |value| Align::parse(Some(value)));
        Self {
            gesture: GestureTracker::new(config.slop(), config.history_len()),
            width: config.width(),
            settled_open: flags.contains(DrawerFlags::OPEN),
            flags,
            align,
            animating: false,
            timers: TimerQueue::new(),
            pending_close: None,
            last_release: None,
            template: DrawerTemplate::instantiate().with_width(config.width()),
            config,
        }
    }

    /// Writes the initial attributes to a freshly attached element.
    pub fn connect(&self, host: &mut impl DrawerHost<P>) {
        host.reflect_attribute(DrawerFlags::OPEN, self.open());
        host.reflect_attribute(DrawerFlags::AUTOCLOSE, self.autoclose());
        host.reflect_align(self.align);
    }

    /// Configuration the drawer was built with.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// This instance's copy of the template prototype, with `--width` set
    /// from the configured width.
    #[must_use]
    pub fn template(&self) -> &DrawerTemplate {
        &self.template
    }

    /// Edge rules for the current alignment.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.template.placement(self.align)
    }

    /// Whether the drawer is open.
    #[must_use]
    pub fn open(&self) -> bool {
        self.flags.contains(DrawerFlags::OPEN)
    }

    /// Opens or closes the drawer.
    ///
    /// Cancels a pending autoclose, marks the drawer animating and reflects
    /// the `open` attribute. The [`ToggleEvent`] follows once the panel
    /// settles: on [`Drawer::transition_end`], or immediately when the panel
    /// already rests at the target offset.
    pub fn set_open(&mut self, open: bool, host: &mut impl DrawerHost<P>) {
        let current = host
            .computed_panel_offset()
            .unwrap_or_else(|| self.resting_offset_for(self.settled_open));
        self.apply_open(open, current, host);
    }

    /// Closes the drawer.
    pub fn close(&mut self, host: &mut impl DrawerHost<P>) {
        self.set_open(false, host);
    }

    /// Sets the open state to `force`, or flips it when `force` is `None`.
    pub fn toggle(&mut self, force: Option<bool>, host: &mut impl DrawerHost<P>) {
        let open = force.unwrap_or(!self.open());
        self.set_open(open, host);
    }

    /// Whether clicks inside the drawer close it by default.
    #[must_use]
    pub fn autoclose(&self) -> bool {
        self.flags.contains(DrawerFlags::AUTOCLOSE)
    }

    /// Sets the default autoclose policy and reflects the attribute.
    pub fn set_autoclose(&mut self, autoclose: bool, host: &mut impl DrawerHost<P>) {
        self.flags.set(DrawerFlags::AUTOCLOSE, autoclose);
        host.reflect_attribute(DrawerFlags::AUTOCLOSE, autoclose);
    }

    /// Reflected presence attributes.
    #[must_use]
    pub fn flags(&self) -> DrawerFlags {
        self.flags
    }

    /// Whether a state change is waiting for the panel to settle.
    #[must_use]
    pub fn animating(&self) -> bool {
        self.animating
    }

    /// Current alignment.
    #[must_use]
    pub fn align(&self) -> Align {
        self.align
    }

    /// Sets the alignment and reflects the attribute.
    pub fn set_align(&mut self, align: Align, host: &mut impl DrawerHost<P>) {
        self.align = align;
        host.reflect_align(align);
    }

    /// Panel width used for clamping and progress.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Updates the measured panel width.
    ///
    /// Non-finite or non-positive widths fall back to the configured width.
    pub fn set_width(&mut self, width: f64) {
        self.width = if is_valid_width(width) {
            width
        } else {
            self.config.width()
        };
    }

    /// Offset the panel rests at for the current open state.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        self.resting_offset_for(self.open())
    }

    /// Current gesture phase.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Live drag offset, while dragging.
    #[must_use]
    pub fn live_offset(&self) -> Option<f64> {
        self.gesture.live_offset()
    }

    /// Notifies the drawer that a transition finished.
    ///
    /// Only the panel's transition completes a pending state change.
    pub fn transition_end(&mut self, target: TransitionTarget, host: &mut impl DrawerHost<P>) {
        if target != TransitionTarget::Panel {
            return;
        }
        if !self.animating {
            log::trace!("drawer: transition end with no pending change");
            return;
        }
        self.complete(host);
    }

    /// Routes a click inside the drawer.
    ///
    /// `ancestry` yields the `autoclose` attribute of the click target and of
    /// each ancestor up to but excluding the drawer element.
    pub fn click<'a, I>(&mut self, ancestry: I, now: u64) -> ClickResolution
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if self.within_suppression(now) {
            return ClickResolution::Suppressed;
        }
        let close = autoclose::resolve(ancestry, self.autoclose());
        self.route_click(close, now)
    }

    /// Routes a click on `target` by walking `lookup` toward `drawer`.
    pub fn click_node<K, L>(&mut self, lookup: &L, target: K, drawer: K, now: u64) -> ClickResolution
    where
        K: Copy + Eq,
        L: AutocloseLookup<K> + ?Sized,
    {
        if self.within_suppression(now) {
            return ClickResolution::Suppressed;
        }
        let close = autoclose::resolve_in_tree(lookup, target, drawer, self.autoclose());
        self.route_click(close, now)
    }

    /// Handles a click on the backdrop: closes immediately.
    pub fn backdrop_click(&mut self, host: &mut impl DrawerHost<P>) {
        self.close(host);
    }

    /// Native drag-and-drop on the drawer is always suppressed.
    #[must_use]
    pub fn native_drag_start(&self) -> PointerDisposition {
        PointerDisposition::Consumed
    }

    /// Deadline of the next deferred action, for host wakeup scheduling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Whether an autoclose is waiting for the next tick.
    #[must_use]
    pub fn close_pending(&self) -> bool {
        self.pending_close.is_some()
    }

    /// Runs deferred actions due at `now`. Returns how many ran.
    pub fn run_timers(&mut self, now: u64, host: &mut impl DrawerHost<P>) -> usize {
        let mut ran = 0;
        while let Some((id, action)) = self.timers.pop_due(now) {
            if self.pending_close == Some(id) {
                self.pending_close = None;
            }
            match action {
                Deferred::Close => {
                    log::debug!("drawer: deferred autoclose");
                    self.close(host);
                }
            }
            ran += 1;
        }
        ran
    }

    /// Handles a pointer press anywhere in the document.
    ///
    /// A repeated press from the pointer already being tracked abandons its
    /// session first, as if it had been cancelled.
    pub fn pointer_down(
        &mut self,
        pointer: P,
        primary: bool,
        position: Point,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        if primary && self.gesture.pointer() == Some(pointer) {
            self.reset_gesture(host);
        }
        self.gesture.pointer_down(pointer, primary, position, host)
    }

    /// Handles a pointer move anywhere in the document.
    pub fn pointer_move(
        &mut self,
        pointer: P,
        position: Point,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        let resting = self.resting_offset_for(self.settled_open);
        // Only a move that may start a drag reads the rendered offset.
        let start_offset = if self.gesture.phase() == GesturePhase::Armed {
            host.computed_panel_offset()
                .unwrap_or(resting)
                .clamp(0.0, self.width)
        } else {
            resting
        };
        let geometry = DrawerGeometry {
            open: self.open(),
            width: self.width,
            start_offset,
        };
        self.gesture.pointer_move(pointer, position, geometry, host)
    }

    /// Handles a pointer release anywhere in the document.
    ///
    /// `now` stamps the release for click suppression.
    pub fn pointer_up(
        &mut self,
        pointer: P,
        now: u64,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        match self.gesture.pointer_up(pointer, host) {
            Some(release) => self.settle(release, now, host),
            None => PointerDisposition::Ignored,
        }
    }

    /// Handles the platform cancelling a pointer.
    pub fn pointer_cancel(&mut self, pointer: P, host: &mut impl DrawerHost<P>) -> PointerDisposition {
        if self.gesture.pointer() != Some(pointer) {
            return PointerDisposition::Ignored;
        }
        self.reset_gesture(host);
        PointerDisposition::Ignored
    }

    /// Dispatches a [`DrawerPointerEvent`] to the matching handler.
    pub fn handle_pointer(
        &mut self,
        event: DrawerPointerEvent<P>,
        now: u64,
        host: &mut impl DrawerHost<P>,
    ) -> PointerDisposition {
        match event {
            DrawerPointerEvent::Down {
                pointer,
                primary,
                position,
            } => self.pointer_down(pointer, primary, position, host),
            DrawerPointerEvent::Move { pointer, position } => {
                self.pointer_move(pointer, position, host)
            }
            DrawerPointerEvent::Up { pointer } => self.pointer_up(pointer, now, host),
            DrawerPointerEvent::Cancel { pointer } => self.pointer_cancel(pointer, host),
        }
    }

    /// Abandons any pointer session, restoring everything a drag changed.
    ///
    /// No open-state decision is made.
    pub fn reset_gesture(&mut self, host: &mut impl DrawerHost<P>) {
        if let Some(release) = self.gesture.cancel(host) {
            if let Some(end) = release.end_offset {
                self.complete_if_at_rest(end, host);
            }
        }
    }

    /// Tears the drawer down: abandons gestures and pending autoclose.
    pub fn detach(&mut self, host: &mut impl DrawerHost<P>) {
        self.reset_gesture(host);
        self.cancel_pending_close();
        self.timers.clear();
    }

    fn resting_offset_for(&self, open: bool) -> f64 {
        if open { self.width } else { 0.0 }
    }

    fn apply_open(&mut self, open: bool, current_offset: f64, host: &mut impl DrawerHost<P>) {
        self.cancel_pending_close();
        self.animating = true;
        self.flags.set(DrawerFlags::OPEN, open);
        host.reflect_attribute(DrawerFlags::OPEN, open);
        if self.gesture.is_dragging() {
            // The release re-checks once the live override is gone.
            return;
        }
        self.complete_if_at_rest(current_offset, host);
    }

    fn complete_if_at_rest(&mut self, offset: f64, host: &mut impl DrawerHost<P>) {
        if self.animating && (offset - self.resting_offset()).abs() < OFFSET_EPSILON {
            self.complete(host);
        }
    }

    fn complete(&mut self, host: &mut impl DrawerHost<P>) {
        self.animating = false;
        self.settled_open = self.open();
        log::debug!("drawer: settled, open = {}", self.settled_open);
        host.dispatch_toggle(ToggleEvent {
            open: self.settled_open,
        });
    }

    fn settle(&mut self, release: Release, now: u64, host: &mut impl DrawerHost<P>) -> PointerDisposition {
        if release.suppress_click {
            self.last_release = Some(now);
        }
        let Some(end) = release.end_offset else {
            return PointerDisposition::Ignored;
        };
        match release.decision {
            Some(open) => {
                self.apply_open(open, end, host);
                PointerDisposition::Consumed
            }
            None => {
                self.complete_if_at_rest(end, host);
                PointerDisposition::Ignored
            }
        }
    }

    fn within_suppression(&self, now: u64) -> bool {
        self.last_release
            .is_some_and(|at| now.saturating_sub(at) < self.config.click_suppression_ms())
    }

    fn route_click(&mut self, close: bool, now: u64) -> ClickResolution {
        if !close {
            return ClickResolution::KeptOpen;
        }
        self.cancel_pending_close();
        self.pending_close = Some(self.timers.schedule(now, Deferred::Close));
        log::debug!("drawer: autoclose scheduled");
        ClickResolution::CloseScheduled
    }

    fn cancel_pending_close(&mut self) {
        if let Some(id) = self.pending_close.take() {
            self.timers.cancel(id);
        }
    }
}
