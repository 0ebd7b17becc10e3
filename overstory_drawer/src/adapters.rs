// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from event libraries to [`Drawer`](crate::Drawer) input.
//!
//! Each adapter lives behind its own feature.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
