// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless demos.

use overstory_drawer::{HostEffect, RecordingHost};

/// Installs a logger honoring `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .try_init();
}

/// Prints and drains the effects recorded since the last call.
pub fn print_effects<P: core::fmt::Debug>(label: &str, host: &mut RecordingHost<P>) {
    println!("== {label} ==");
    for effect in host.take_effects() {
        match effect {
            HostEffect::LiveOffset(Some(live)) => {
                println!("  live offset {:>6.1}  progress {:.2}", live.offset, live.progress);
            }
            other => println!("  {other:?}"),
        }
    }
}
