// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoclose routing: decide whether a click inside the drawer closes it.
//!
//! Starting at the click target and walking outward toward (but excluding)
//! the drawer element, the nearest element carrying an `autoclose` attribute
//! decides: `autoclose="false"` keeps the drawer open, any other value closes
//! it. Without an override the drawer's own `autoclose` property applies.
//!
//! Two entry points are provided:
//!
//! - [`resolve`] over a pre-resolved ancestry, target first.
//! - [`resolve_in_tree`] over any tree exposing an [`AutocloseLookup`].
//!
//! ```
//! use overstory_drawer::autoclose::resolve;
//!
//! // <div autoclose=""><button autoclose="false"><span/></button></div>
//! let ancestry = [None, Some("false"), Some("")];
//! assert!(!resolve(ancestry, true));
//!
//! // A plain descendant falls back to the drawer's policy.
//! assert!(resolve([None, None], true));
//! assert!(!resolve([None, None], false));
//! ```

use crate::attributes::autoclose_value;

/// Resolves the autoclose policy for a click.
///
/// `ancestry` yields the `autoclose` attribute of the click target, then of
/// each ancestor up to but excluding the drawer element; `None` means the
/// element has no such attribute. `default` is the drawer's own policy.
pub fn resolve<'a, I>(ancestry: I, default: bool) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    ancestry
        .into_iter()
        .flatten()
        .next()
        .map_or(default, autoclose_value)
}

/// Tree access needed by [`resolve_in_tree`].
pub trait AutocloseLookup<K> {
    /// Parent of `node`, or `None` at a root or for a detached node.
    fn parent(&self, node: K) -> Option<K>;

    /// Value of the `autoclose` attribute on `node`, if present.
    fn autoclose_attr(&self, node: K) -> Option<&str>;
}

/// Resolves the autoclose policy by walking from `target` toward `drawer`.
///
/// The walk stops before `drawer`. A target outside the drawer's subtree
/// walks to its own root and, without an override on the way, yields
/// `default`.
pub fn resolve_in_tree<K, L>(lookup: &L, target: K, drawer: K, default: bool) -> bool
where
    K: Copy + Eq,
    L: AutocloseLookup<K> + ?Sized,
{
    let mut node = Some(target);
    while let Some(current) = node {
        if current == drawer {
            break;
        }
        if let Some(value) = lookup.autoclose_attr(current) {
            return autoclose_value(value);
        }
        node = lookup.parent(current);
    }
    default
}
