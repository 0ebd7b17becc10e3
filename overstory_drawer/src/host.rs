// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration: the effects a drawer asks of its environment.
//!
//! The drawer never touches a document, a style engine or an event loop
//! directly. Everything it needs is expressed through [`DrawerHost`], which a
//! DOM binding, a retained scene, or a test harness implements.
//!
//! [`RecordingHost`] is a complete in-memory implementation that records
//! every effect in order; it backs the crate's tests and headless demos.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::attributes::{Align, DrawerFlags};

/// Completion event dispatched on the drawer after an open-state change settles.
///
/// Carries the resulting open state both as [`ToggleEvent::open`] and as the
/// conventional [`ToggleEvent::detail`] payload. The event does not bubble.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToggleEvent {
    /// Open state after the change.
    pub open: bool,
}

impl ToggleEvent {
    /// Event type name.
    pub const NAME: &'static str = "toggle";

    /// Conventional payload; same value as [`ToggleEvent::open`].
    #[must_use]
    pub fn detail(&self) -> bool {
        self.open
    }

    /// Toggle events stay on the drawer element.
    #[must_use]
    pub fn bubbles(&self) -> bool {
        false
    }
}

/// Element whose transition finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    /// The sliding panel. Only this target completes an open-state change.
    Panel,
    /// The dimming backdrop.
    Backdrop,
    /// Any other element, typically slotted content.
    Other,
}

/// Live visual override applied while a drag is in progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LiveOffset {
    /// Panel offset in `[0, width]`.
    pub offset: f64,
    /// `offset / width`, in `[0, 1]`; drives backdrop opacity.
    pub progress: f64,
}

/// Document-wide style properties a drag overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    /// Text selection setting (`user-select`).
    pub user_select: String,
    /// Touch handling setting (`touch-action`).
    pub touch_action: String,
}

impl DocumentStyle {
    /// Style applied for the duration of a drag.
    #[must_use]
    pub fn locked() -> Self {
        Self {
            user_select: String::from("none"),
            touch_action: String::from("none"),
        }
    }
}

/// Whether an input event was consumed by the drawer.
///
/// A consumed event should have its default action prevented and its
/// propagation stopped by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerDisposition {
    /// The drawer did not act on the event.
    Ignored,
    /// The drawer handled the event.
    Consumed,
}

impl PointerDisposition {
    /// Returns `true` for [`PointerDisposition::Consumed`].
    #[must_use]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// The environment a [`Drawer`](crate::Drawer) drives.
///
/// `P` is the host's pointer identifier type.
pub trait DrawerHost<P> {
    /// Adds (`present == true`) or removes a presence attribute.
    fn reflect_attribute(&mut self, flag: DrawerFlags, present: bool);

    /// Writes the `align` attribute.
    fn reflect_align(&mut self, align: Align) {
        let _ = align;
    }

    /// Applies or clears (`None`) the live drag override.
    ///
    /// Clearing hands the panel back to the attribute-driven resting offset.
    fn set_live_offset(&mut self, live: Option<LiveOffset>);

    /// Suspends or restores the panel and backdrop transitions.
    fn set_transitions_suspended(&mut self, suspended: bool);

    /// Routes further input from `pointer` to the panel.
    ///
    /// Returns `false` when capture is unsupported; the drag still works.
    fn capture_pointer(&mut self, pointer: P) -> bool {
        let _ = pointer;
        false
    }

    /// Panel offset as currently rendered, possibly mid-transition.
    ///
    /// Returning `None` makes the drawer assume its last resting offset.
    fn computed_panel_offset(&self) -> Option<f64> {
        None
    }

    /// Reads the document-wide style properties a drag overrides.
    fn document_style(&self) -> DocumentStyle;

    /// Writes the document-wide style properties a drag overrides.
    fn set_document_style(&mut self, style: DocumentStyle);

    /// Dispatches the completion event on the drawer element.
    fn dispatch_toggle(&mut self, event: ToggleEvent);
}

/// One recorded call on a [`RecordingHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostEffect<P> {
    /// [`DrawerHost::reflect_attribute`].
    Attribute {
        /// Reflected flag.
        flag: DrawerFlags,
        /// New presence.
        present: bool,
    },
    /// [`DrawerHost::reflect_align`].
    Align(Align),
    /// [`DrawerHost::set_live_offset`].
    LiveOffset(Option<LiveOffset>),
    /// [`DrawerHost::set_transitions_suspended`].
    TransitionsSuspended(bool),
    /// [`DrawerHost::capture_pointer`].
    CapturePointer(P),
    /// [`DrawerHost::set_document_style`].
    DocumentStyle(DocumentStyle),
    /// [`DrawerHost::dispatch_toggle`].
    Toggle(ToggleEvent),
}

/// In-memory [`DrawerHost`] that applies and records every effect.
#[derive(Clone, Debug)]
pub struct RecordingHost<P> {
    /// Every effect, in call order.
    pub effects: Vec<HostEffect<P>>,
    /// Currently present attributes.
    pub attributes: DrawerFlags,
    /// Current `align` attribute.
    pub align: Align,
    /// Current live override.
    pub live_offset: Option<LiveOffset>,
    /// Whether transitions are suspended.
    pub transitions_suspended: bool,
    /// Current document style.
    pub document_style: DocumentStyle,
    /// Value reported by [`DrawerHost::computed_panel_offset`].
    pub computed_offset: Option<f64>,
    /// Number of [`DrawerHost::computed_panel_offset`] reads.
    pub offset_queries: Cell<usize>,
    /// Whether [`DrawerHost::capture_pointer`] succeeds.
    pub supports_capture: bool,
}

impl<P> Default for RecordingHost<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RecordingHost<P> {
    /// Creates a host with an empty document style and pointer capture support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
            attributes: DrawerFlags::empty(),
            align: Align::Left,
            live_offset: None,
            transitions_suspended: false,
            document_style: DocumentStyle::default(),
            computed_offset: None,
            offset_queries: Cell::new(0),
            supports_capture: true,
        }
    }

    /// Sets the document style a drag will find and must restore.
    #[must_use]
    pub fn with_document_style(mut self, style: DocumentStyle) -> Self {
        self.document_style = style;
        self
    }

    /// Toggle events dispatched so far.
    pub fn toggles(&self) -> impl Iterator<Item = ToggleEvent> + '_ {
        self.effects.iter().filter_map(|e| match e {
            HostEffect::Toggle(t) => Some(*t),
            _ => None,
        })
    }

    /// Live panel offsets applied so far, in order; cleared overrides are skipped.
    #[must_use]
    pub fn live_offsets(&self) -> Vec<f64> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                HostEffect::LiveOffset(Some(live)) => Some(live.offset),
                _ => None,
            })
            .collect()
    }

    /// Drains the recorded effects, leaving the current state in place.
    pub fn take_effects(&mut self) -> Vec<HostEffect<P>> {
        core::mem::take(&mut self.effects)
    }
}

impl<P: Copy> DrawerHost<P> for RecordingHost<P> {
    fn reflect_attribute(&mut self, flag: DrawerFlags, present: bool) {
        self.attributes.set(flag, present);
        self.effects.push(HostEffect::Attribute { flag, present });
    }

    fn reflect_align(&mut self, align: Align) {
        self.align = align;
        self.effects.push(HostEffect::Align(align));
    }

    fn set_live_offset(&mut self, live: Option<LiveOffset>) {
        self.live_offset = live;
        self.effects.push(HostEffect::LiveOffset(live));
    }

    fn set_transitions_suspended(&mut self, suspended: bool) {
        self.transitions_suspended = suspended;
        self.effects.push(HostEffect::TransitionsSuspended(suspended));
    }

    fn capture_pointer(&mut self, pointer: P) -> bool {
        if self.supports_capture {
            self.effects.push(HostEffect::CapturePointer(pointer));
        }
        self.supports_capture
    }

    fn computed_panel_offset(&self) -> Option<f64> {
        self.offset_queries.set(self.offset_queries.get() + 1);
        self.computed_offset
    }

    fn document_style(&self) -> DocumentStyle {
        self.document_style.clone()
    }

    fn set_document_style(&mut self, style: DocumentStyle) {
        self.document_style = style.clone();
        self.effects.push(HostEffect::DocumentStyle(style));
    }

    fn dispatch_toggle(&mut self, event: ToggleEvent) {
        self.effects.push(HostEffect::Toggle(event));
    }
}
