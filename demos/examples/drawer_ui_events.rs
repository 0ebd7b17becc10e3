// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer driven by `ui_events` pointer events.
//!
//! Builds `PointerEvent` values the way a windowing backend would, on a
//! 2x display, and feeds them through `Drawer::handle_ui_event`. The adapter
//! converts physical positions to logical ones and nanosecond timestamps to
//! milliseconds.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example drawer_ui_events`

use overstory_drawer::adapters::ui_events::UiPointer;
use overstory_drawer::{Drawer, DrawerConfig, RecordingHost, TransitionTarget};
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};
use understory_demos::{init_logging, print_effects};

const SCALE: f64 = 2.0;

fn mouse() -> PointerInfo {
    PointerInfo {
        pointer_id: Some(PointerId::PRIMARY),
        persistent_device_id: None,
        pointer_type: PointerType::Mouse,
    }
}

/// State at logical `x`, `ms` milliseconds in.
fn state(x: f64, ms: u64) -> PointerState {
    let mut state = PointerState {
        time: ms * 1_000_000,
        scale_factor: SCALE,
        ..PointerState::default()
    };
    state.position.x = x * SCALE;
    state.position.y = 240.0 * SCALE;
    state
}

fn main() {
    init_logging();

    let mut drawer = Drawer::<UiPointer>::new(DrawerConfig::default());
    let mut host = RecordingHost::new();
    drawer.connect(&mut host);
    drawer.set_open(true, &mut host);
    drawer.transition_end(TransitionTarget::Panel, &mut host);
    print_effects("opened", &mut host);

    // Drag the open panel back toward the edge with the mouse.
    let mut ms = 5_000;
    drawer.handle_ui_event(
        &PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: mouse(),
            state: state(180.0, ms),
        }),
        &mut host,
    );
    for x in [172.0, 150.0, 120.0, 80.0, 40.0] {
        ms += 8;
        drawer.handle_ui_event(
            &PointerEvent::Move(PointerUpdate {
                pointer: mouse(),
                current: state(x, ms),
                coalesced: Vec::new(),
                predicted: Vec::new(),
            }),
            &mut host,
        );
    }
    drawer.handle_ui_event(
        &PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: mouse(),
            state: state(40.0, ms),
        }),
        &mut host,
    );
    print_effects("mouse drag closed", &mut host);
    assert!(!drawer.open());

    drawer.transition_end(TransitionTarget::Panel, &mut host);
    print_effects("panel settled", &mut host);

    // A right-button press never arms a gesture.
    drawer.handle_ui_event(
        &PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Secondary),
            pointer: mouse(),
            state: state(10.0, ms + 100),
        }),
        &mut host,
    );
    println!("== secondary press ==\n  phase {:?}", drawer.gesture_phase());
}
