// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal structure and default styling of a drawer instance.
//!
//! Every drawer stamps the same parts: a panel (`aside`) holding a `header`
//! slot and the default slot, and a backdrop (`div`) holding a `backdrop` slot.
//! The stylesheet defaults (custom properties, transitions, stacking) are
//! shared too.
//!
//! The prototype is built lazily the first time a drawer is created on a UI
//! thread and is never mutated afterwards; each instance receives a clone via
//! [`DrawerTemplate::instantiate`]. A drawer then writes its configured
//! width into its own copy with [`DrawerTemplate::with_width`].

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::attributes::Align;

/// Role of a stamped part.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// The sliding panel.
    Panel,
    /// The dimming overlay behind the panel.
    Backdrop,
}

/// One stamped element and the slots it exposes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// Role of the element.
    pub kind: PartKind,
    /// Element tag.
    pub tag: &'static str,
    /// Slot names in document order; `None` is the default slot.
    pub slots: Vec<Option<&'static str>>,
}

/// A CSS-style transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Animated property.
    pub property: &'static str,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: &'static str,
}

/// Edge anchoring of the panel derived from [`Align`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Panel is attached to the right edge instead of the left.
    pub anchor_right: bool,
    /// Panel is attached to the bottom edge instead of the top.
    pub anchor_bottom: bool,
    /// Panel spans the full viewport width and uses `--width` as its height.
    pub full_width: bool,
}

/// Default custom properties, by name.
const DEFAULT_VARS: &[(&str, &str)] = &[
    ("--width", "200px"),
    ("--max-width", "100"),
    ("--background", "#eee"),
    ("--backdrop", "rgba(0, 0, 0, 0.5)"),
];

/// Stamped structure and default styling for a drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerTemplate {
    parts: Vec<Part>,
    vars: Vec<(&'static str, String)>,
    panel_transition: Transition,
    backdrop_transition: Transition,
    panel_z: i32,
    backdrop_z: i32,
}

std::thread_local! {
    static PROTOTYPE: DrawerTemplate = DrawerTemplate::build();
}

#[cfg(test)]
std::thread_local! {
    static BUILDS: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
}

impl DrawerTemplate {
    /// Returns a copy of this thread's prototype, building it on first use.
    #[must_use]
    pub fn instantiate() -> Self {
        PROTOTYPE.with(Clone::clone)
    }

    fn build() -> Self {
        #[cfg(test)]
        BUILDS.with(|b| b.set(b.get() + 1));
        log::trace!("drawer: building template prototype");
        Self {
            parts: alloc::vec![
                Part {
                    kind: PartKind::Panel,
                    tag: "aside",
                    slots: alloc::vec![Some("header"), None],
                },
                Part {
                    kind: PartKind::Backdrop,
                    tag: "div",
                    slots: alloc::vec![Some("backdrop")],
                },
            ],
            vars: DEFAULT_VARS
                .iter()
                .map(|&(name, value)| (name, value.to_string()))
                .collect(),
            panel_transition: Transition {
                property: "transform",
                duration_ms: 200,
                easing: "cubic-bezier(0, 0, 0.5, 1)",
            },
            backdrop_transition: Transition {
                property: "opacity",
                duration_ms: 300,
                easing: "ease",
            },
            panel_z: 1000,
            backdrop_z: 999,
        }
    }

    /// Stamped parts in document order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The part with the given role.
    #[must_use]
    pub fn part(&self, kind: PartKind) -> Option<&Part> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    /// Sets the `--width` default, in pixels.
    ///
    /// This is the fallback the stylesheet uses before anything is measured;
    /// later measurements go through [`Drawer::set_width`](crate::Drawer::set_width)
    /// and leave the template alone.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        let value = format!("{width}px");
        match self.vars.iter_mut().find(|(n, _)| *n == "--width") {
            Some((_, v)) => *v = value,
            None => self.vars.push(("--width", value)),
        }
        self
    }

    /// Default value of a custom property.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Transition the panel uses to settle.
    #[must_use]
    pub fn panel_transition(&self) -> Transition {
        self.panel_transition
    }

    /// Transition the backdrop uses to fade.
    #[must_use]
    pub fn backdrop_transition(&self) -> Transition {
        self.backdrop_transition
    }

    /// Stacking order of the panel and backdrop, as `(panel, backdrop)`.
    #[must_use]
    pub fn z_order(&self) -> (i32, i32) {
        (self.panel_z, self.backdrop_z)
    }

    /// Edge rules for an alignment.
    #[must_use]
    pub fn placement(&self, align: Align) -> Placement {
        Placement {
            anchor_right: align == Align::Right,
            anchor_bottom: align == Align::Bottom,
            full_width: align.spans_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prototype_is_built_once_per_thread() {
        let before = BUILDS.with(core::cell::Cell::get);
        let a = DrawerTemplate::instantiate();
        let b = DrawerTemplate::instantiate();
        let after = BUILDS.with(core::cell::Cell::get);
        assert_eq!(a, b);
        assert!(after >= 1);
        assert!(after - before <= 1);
    }

    #[test]
    fn panel_precedes_backdrop() {
        let t = DrawerTemplate::instantiate();
        let kinds: Vec<_> = t.parts().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, [PartKind::Panel, PartKind::Backdrop]);
        assert_eq!(
            t.part(PartKind::Panel).unwrap().slots,
            [Some("header"), None]
        );
        let (panel, backdrop) = t.z_order();
        assert!(panel > backdrop);
    }

    #[test]
    fn defaults_match_the_gesture_width() {
        let t = DrawerTemplate::instantiate();
        assert_eq!(t.var("--width"), Some("200px"));
        assert_eq!(t.var("--unknown"), None);
        assert_eq!(t.panel_transition().property, "transform");
        assert_eq!(t.backdrop_transition().duration_ms, 300);
    }

    #[test]
    fn width_override_rewrites_only_the_width() {
        let t = DrawerTemplate::instantiate().with_width(320.0);
        assert_eq!(t.var("--width"), Some("320px"));
        assert_eq!(t.var("--max-width"), Some("100"));
        assert_eq!(
            DrawerTemplate::instantiate().with_width(187.5).var("--width"),
            Some("187.5px")
        );
        // The prototype itself is untouched.
        assert_eq!(DrawerTemplate::instantiate().var("--width"), Some("200px"));
    }

    #[test]
    fn placement_follows_align() {
        let t = DrawerTemplate::instantiate();
        assert_eq!(
            t.placement(Align::Left),
            Placement {
                anchor_right: false,
                anchor_bottom: false,
                full_width: false
            }
        );
        assert!(t.placement(Align::Right).anchor_right);
        let bottom = t.placement(Align::Bottom);
        assert!(bottom.anchor_bottom && bottom.full_width);
        assert!(t.placement(Align::Top).full_width);
    }
}
