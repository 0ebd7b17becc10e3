// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer swipe, autoclose and completion events.
//!
//! Drives an `overstory_drawer::Drawer` with a scripted pointer stream against
//! a `RecordingHost` and prints every effect the drawer asks of its host.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example drawer_swipe`

use kurbo::Point;
use overstory_drawer::{
    ClickResolution, Drawer, DrawerConfig, DrawerPointerEvent, RecordingHost, TransitionTarget,
};
use understory_demos::{init_logging, print_effects};

fn main() {
    init_logging();

    let config = DrawerConfig::builder()
        .autoclose(true)
        .build()
        .expect("default widths are valid");
    let mut drawer = Drawer::<u32>::new(config);
    let mut host = RecordingHost::new();
    drawer.connect(&mut host);
    print_effects("connect", &mut host);

    // A finger lands near the left edge and swipes right.
    let mut now = 10_000;
    drawer.handle_pointer(
        DrawerPointerEvent::Down {
            pointer: 1,
            primary: true,
            position: Point::new(100.0, 320.0),
        },
        now,
        &mut host,
    );
    for x in [106.0, 130.0, 160.0, 175.0, 190.0] {
        now += 16;
        drawer.handle_pointer(
            DrawerPointerEvent::Move {
                pointer: 1,
                position: Point::new(x, 321.0),
            },
            now,
            &mut host,
        );
    }
    drawer.handle_pointer(DrawerPointerEvent::Up { pointer: 1 }, now, &mut host);
    print_effects("swipe open", &mut host);
    assert!(drawer.open());

    drawer.transition_end(TransitionTarget::Panel, &mut host);
    print_effects("panel settled", &mut host);

    // The synthetic click trailing the release is swallowed.
    assert_eq!(drawer.click([None], now + 5), ClickResolution::Suppressed);

    // A button opting out keeps the drawer open.
    now += 400;
    let kept = drawer.click([None, Some("false")], now);
    println!("== click inside autoclose=\"false\" ==\n  {kept:?}");
    assert_eq!(kept, ClickResolution::KeptOpen);

    // A plain link closes it on the next tick.
    now += 400;
    let closing = drawer.click([None], now);
    println!("== click on a plain link ==\n  {closing:?}");
    drawer.run_timers(now + 1, &mut host);
    drawer.transition_end(TransitionTarget::Panel, &mut host);
    print_effects("autoclose", &mut host);
    assert!(!drawer.open());
}
