// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI kernels regularly need "run this later" behaviour: deferring work to the
//! next tick, debouncing, timeouts. Owning a clock or an executor would tie a
//! kernel to one host, so this crate only stores deadlines. The host decides
//! what a timestamp is (milliseconds since some epoch, frame counters, …),
//! passes the current time in, and gets back the payloads that are due.
//!
//! ## Ordering
//!
//! - Timers fire in deadline order.
//! - Timers sharing a deadline fire in scheduling order.
//! - A deadline at or before `now` is due; "next tick" work is scheduled at the
//!   current timestamp and fires on the next poll.
//!
//! ## Minimal example
//!
//! ```
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let a = timers.schedule(100, 'a');
//! let b = timers.schedule(50, 'b');
//! let c = timers.schedule(50, 'c');
//!
//! assert_eq!(timers.next_deadline(), Some(50));
//! assert_eq!(timers.pop_due(10), None);
//!
//! let due: Vec<_> = timers.drain_due(60).into_iter().map(|(_, p)| p).collect();
//! assert_eq!(due, ['b', 'c']);
//!
//! assert!(timers.is_pending(a));
//! assert!(!timers.is_pending(b));
//! assert!(!timers.is_pending(c));
//! assert_eq!(timers.cancel(a), Some('a'));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Handle to a scheduled timer.
///
/// Handles are never reused within one [`TimerQueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw value of this handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// A queue of payloads ordered by deadline.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by (deadline, id).
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Ids grow monotonically, so inserting after every entry with an equal
        // or earlier deadline keeps ties in scheduling order.
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.payload))
    }

    /// Removes and returns every timer due at `now`, in firing order.
    pub fn drain_due(&mut self, now: u64) -> Vec<(TimerId, T)> {
        let split = self.entries.partition_point(|e| e.deadline <= now);
        self.entries
            .drain(..split)
            .map(|e| (e.id, e.payload))
            .collect()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
