// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped override of the document-wide drag styles.
//!
//! While a drag is live, text selection and touch scrolling are disabled for
//! the whole document. Those properties are shared with the rest of the page,
//! so the previous values are captured before the override and written back
//! verbatim afterwards.
//!
//! [`StyleLease`] is the only way the drawer touches them: acquiring one
//! captures and overrides, releasing it restores. The gesture tracker holds
//! the lease inside the dragging session and releases it on every path that
//! ends a drag: pointer-up, pointer-cancel, [`Drawer::reset_gesture`] and
//! [`Drawer::detach`].
//!
//! [`Drawer::reset_gesture`]: crate::Drawer::reset_gesture
//! [`Drawer::detach`]: crate::Drawer::detach

use crate::host::{DocumentStyle, DrawerHost};

/// Captured document style, restored on [`StyleLease::release`].
#[derive(Debug)]
#[must_use = "dropping a lease without releasing it leaves the document locked"]
pub struct StyleLease {
    saved: DocumentStyle,
}

impl StyleLease {
    /// Captures the current document style and applies [`DocumentStyle::locked`].
    pub fn acquire<P, H: DrawerHost<P> + ?Sized>(host: &mut H) -> Self {
        let saved = host.document_style();
        host.set_document_style(DocumentStyle::locked());
        Self { saved }
    }

    /// Style that will be restored.
    #[must_use]
    pub fn saved(&self) -> &DocumentStyle {
        &self.saved
    }

    /// Restores the captured style.
    pub fn release<P, H: DrawerHost<P> + ?Sized>(self, host: &mut H) {
        host.set_document_style(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    fn page_style() -> DocumentStyle {
        DocumentStyle {
            user_select: "text".into(),
            touch_action: "pan-y".into(),
        }
    }

    #[test]
    fn acquire_locks_and_release_restores_verbatim() {
        let mut host = RecordingHost::<u32>::new().with_document_style(page_style());

        let lease = StyleLease::acquire(&mut host);
        assert_eq!(host.document_style, DocumentStyle::locked());
        assert_eq!(lease.saved(), &page_style());

        lease.release(&mut host);
        assert_eq!(host.document_style, page_style());
    }

    #[test]
    fn empty_values_are_restored_as_empty() {
        let mut host = RecordingHost::<u32>::new();
        StyleLease::acquire(&mut host).release(&mut host);
        assert_eq!(host.document_style, DocumentStyle::default());
    }
}
