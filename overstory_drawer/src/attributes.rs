// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element contract: tag name, reflected attributes and their parsing rules.
//!
//! Attribute parsing never fails. Unknown `align` values fall back to
//! [`Align::Left`], and any `autoclose` value other than `"false"` enables
//! autoclose.

/// Custom element tag name of the drawer.
pub const TAG_NAME: &str = "app-drawer";

/// Presence attribute reflecting the open state.
pub const OPEN_ATTR: &str = "open";

/// Presence attribute reflecting the default autoclose policy.
///
/// Descendants may carry the same attribute with a value to override the
/// policy for clicks inside them (see [`crate::autoclose`]).
pub const AUTOCLOSE_ATTR: &str = "autoclose";

/// Attribute selecting the edge the panel slides in from.
pub const ALIGN_ATTR: &str = "align";

bitflags::bitflags! {
    /// Presence attributes reflected on the drawer element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DrawerFlags: u8 {
        /// The drawer is open.
        const OPEN      = 0b0000_0001;
        /// Clicks inside the drawer close it unless overridden.
        const AUTOCLOSE = 0b0000_0010;
    }
}

impl DrawerFlags {
    /// Attribute name for a single flag, or `None` for empty or combined sets.
    #[must_use]
    pub fn attribute_name(self) -> Option<&'static str> {
        if self == Self::OPEN {
            Some(OPEN_ATTR)
        } else if self == Self::AUTOCLOSE {
            Some(AUTOCLOSE_ATTR)
        } else {
            None
        }
    }
}

/// Edge the drawer panel is attached to.
///
/// Alignment only affects styling; the swipe gesture always works along X.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Panel slides in from the left edge.
    #[default]
    Left,
    /// Panel slides in from the right edge.
    Right,
    /// Panel spans the top edge.
    Top,
    /// Panel spans the bottom edge.
    Bottom,
}

impl Align {
    /// Parses an `align` attribute value.
    ///
    /// Missing or unrecognized values map to [`Align::Left`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("right") => Self::Right,
            Some(v) if v.eq_ignore_ascii_case("top") => Self::Top,
            Some(v) if v.eq_ignore_ascii_case("bottom") => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// Attribute value for this alignment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Returns `true` for alignments where the panel spans the full width.
    #[must_use]
    pub fn spans_width(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Interprets the value of an explicit `autoclose` attribute on a descendant.
///
/// Only the literal `"false"` disables autoclose; the empty string and every
/// other value enable it.
#[must_use]
pub fn autoclose_value(value: &str) -> bool {
    value != "false"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flags_name_their_attribute() {
        assert_eq!(DrawerFlags::OPEN.attribute_name(), Some("open"));
        assert_eq!(DrawerFlags::AUTOCLOSE.attribute_name(), Some("autoclose"));
        assert_eq!(DrawerFlags::empty().attribute_name(), None);
        assert_eq!(DrawerFlags::all().attribute_name(), None);
    }

    #[test]
    fn align_tolerates_malformed_values() {
        assert_eq!(Align::parse(None), Align::Left);
        assert_eq!(Align::parse(Some("")), Align::Left);
        assert_eq!(Align::parse(Some("diagonal")), Align::Left);
        assert_eq!(Align::parse(Some(" Right ")), Align::Right);
        assert_eq!(Align::parse(Some("bottom")), Align::Bottom);
        assert!(Align::Top.spans_width());
        assert!(!Align::Right.spans_width());
    }

    #[test]
    fn align_round_trips_through_attribute_value() {
        for align in [Align::Left, Align::Right, Align::Top, Align::Bottom] {
            assert_eq!(Align::parse(Some(align.as_str())), align);
        }
    }

    #[test]
    fn only_literal_false_disables_autoclose() {
        assert!(!autoclose_value("false"));
        assert!(autoclose_value(""));
        assert!(autoclose_value("true"));
        assert!(autoclose_value("FALSE"));
        assert!(autoclose_value("0"));
    }
}
