// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeds [`ui_events`] pointer streams into a drawer.
//!
//! The drawer is keyed by `Option<PointerId>`, matching
//! [`PointerInfo::pointer_id`]. Positions use the event's logical point and
//! timestamps are converted from nanoseconds to milliseconds.

use ui_events::pointer::{PointerButton, PointerEvent, PointerId, PointerInfo, PointerUpdate};

use crate::drawer::{Drawer, DrawerPointerEvent};
use crate::host::{DrawerHost, PointerDisposition};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Pointer identifier used by the adapter.
pub type UiPointer = Option<PointerId>;

/// Converts a [`PointerEvent`] into drawer input and its timestamp in milliseconds.
///
/// Returns `None` for events the drawer has no use for (hover, scroll, gestures).
pub fn translate(event: &PointerEvent) -> Option<(DrawerPointerEvent<UiPointer>, u64)> {
    match event {
        PointerEvent::Down(e) => Some((
            DrawerPointerEvent::Down {
                pointer: e.pointer.pointer_id,
                primary: matches!(e.button, None | Some(PointerButton::Primary)),
                position: e.state.logical_point(),
            },
            e.state.time / NANOS_PER_MILLI,
        )),
        PointerEvent::Move(PointerUpdate {
            pointer, current, ..
        }) => Some((
            DrawerPointerEvent::Move {
                pointer: pointer.pointer_id,
                position: current.logical_point(),
            },
            current.time / NANOS_PER_MILLI,
        )),
        PointerEvent::Up(e) => Some((
            DrawerPointerEvent::Up {
                pointer: e.pointer.pointer_id,
            },
            e.state.time / NANOS_PER_MILLI,
        )),
        PointerEvent::Cancel(PointerInfo { pointer_id, .. }) => Some((
            DrawerPointerEvent::Cancel {
                pointer: *pointer_id,
            },
            0,
        )),
        _ => None,
    }
}

impl Drawer<UiPointer> {
    /// Handles a [`PointerEvent`].
    ///
    /// A cancel carries no timestamp; it never stamps a release, so `0` is passed.
    pub fn handle_ui_event(
        &mut self,
        event: &PointerEvent,
        host: &mut impl DrawerHost<UiPointer>,
    ) -> PointerDisposition {
        match translate(event) {
            Some((input, now)) => self.handle_pointer(input, now, host),
            None => PointerDisposition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;
    use ui_events::ScrollDelta;
    use ui_events::pointer::{PointerButtonEvent, PointerScrollEvent, PointerState, PointerType};

    use super::*;
    use crate::config::DrawerConfig;
    use crate::gesture::GesturePhase;
    use crate::host::{RecordingHost, TransitionTarget};

    fn info(id: u64) -> PointerInfo {
        PointerInfo {
            pointer_id: PointerId::new(id),
            persistent_device_id: None,
            pointer_type: PointerType::Touch,
        }
    }

    fn state(x: f64, y: f64, ms: u64) -> PointerState {
        let mut state = PointerState {
            time: ms * NANOS_PER_MILLI,
            ..PointerState::default()
        };
        state.position.x = x;
        state.position.y = y;
        state
    }

    fn down(button: Option<PointerButton>, x: f64, ms: u64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button,
            pointer: info(1),
            state: state(x, 300.0, ms),
        })
    }

    fn moved(x: f64, ms: u64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer: info(1),
            current: state(x, 300.0, ms),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        })
    }

    fn up(x: f64, ms: u64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: info(1),
            state: state(x, 300.0, ms),
        })
    }

    #[test]
    fn timestamps_are_milliseconds() {
        let mut event = down(Some(PointerButton::Primary), 10.0, 0);
        if let PointerEvent::Down(e) = &mut event {
            e.state.time = 1_234_999_999;
        }
        let (input, now) = translate(&event).unwrap();
        assert_eq!(now, 1_234);
        assert_eq!(
            input,
            DrawerPointerEvent::Down {
                pointer: PointerId::new(1),
                primary: true,
                position: Point::new(10.0, 300.0),
            }
        );

        assert_eq!(translate(&moved(20.0, 40)).unwrap().1, 40);
        assert_eq!(translate(&up(20.0, 56)).unwrap().1, 56);
    }

    #[test]
    fn positions_are_logical() {
        let mut event = moved(0.0, 0);
        if let PointerEvent::Move(update) = &mut event {
            update.current.position.x = 300.0;
            update.current.position.y = 90.0;
            update.current.scale_factor = 1.5;
        }
        let (input, _) = translate(&event).unwrap();
        assert_eq!(
            input,
            DrawerPointerEvent::Move {
                pointer: PointerId::new(1),
                position: Point::new(200.0, 60.0),
            }
        );
    }

    #[test]
    fn only_primary_or_unspecified_buttons_press() {
        let primary = |button| match translate(&down(button, 0.0, 0)) {
            Some((DrawerPointerEvent::Down { primary, .. }, _)) => primary,
            other => panic!("expected a press, got {other:?}"),
        };
        assert!(primary(None));
        assert!(primary(Some(PointerButton::Primary)));
        assert!(!primary(Some(PointerButton::Secondary)));
        assert!(!primary(Some(PointerButton::Auxiliary)));
    }

    #[test]
    fn cancel_has_no_timestamp() {
        assert_eq!(
            translate(&PointerEvent::Cancel(info(3))),
            Some((
                DrawerPointerEvent::Cancel {
                    pointer: PointerId::new(3)
                },
                0
            ))
        );
    }

    #[test]
    fn hover_and_scroll_are_not_drawer_input() {
        assert_eq!(translate(&PointerEvent::Enter(info(1))), None);
        assert_eq!(translate(&PointerEvent::Leave(info(1))), None);
        let scroll = PointerEvent::Scroll(PointerScrollEvent {
            pointer: info(1),
            delta: ScrollDelta::LineDelta(0.0, -3.0),
            state: state(10.0, 10.0, 5),
        });
        assert_eq!(translate(&scroll), None);

        let mut drawer = Drawer::<UiPointer>::new(DrawerConfig::default());
        let mut host = RecordingHost::new();
        assert_eq!(
            drawer.handle_ui_event(&scroll, &mut host),
            PointerDisposition::Ignored
        );
        assert!(host.effects.is_empty());
    }

    #[test]
    fn swipe_opens_through_ui_events() {
        let mut drawer = Drawer::<UiPointer>::new(DrawerConfig::default());
        let mut host = RecordingHost::new();

        drawer.handle_ui_event(&down(None, 2.0, 1_000), &mut host);
        let mut ms = 1_000;
        for x in [20.0, 50.0, 90.0, 130.0, 170.0] {
            ms += 16;
            drawer.handle_ui_event(&moved(x, ms), &mut host);
        }
        assert_eq!(drawer.gesture_phase(), GesturePhase::Dragging);
        assert_eq!(drawer.live_offset(), Some(168.0));

        assert_eq!(
            drawer.handle_ui_event(&up(170.0, ms), &mut host),
            PointerDisposition::Consumed
        );
        assert!(drawer.open());
        drawer.transition_end(TransitionTarget::Panel, &mut host);
        assert_eq!(host.toggles().map(|t| t.open).collect::<Vec<_>>(), [true]);
    }

    #[test]
    fn cancel_through_ui_events_restores_the_page() {
        let mut drawer = Drawer::<UiPointer>::new(DrawerConfig::default());
        let mut host = RecordingHost::new();
        let page = host.document_style.clone();

        drawer.handle_ui_event(&down(Some(PointerButton::Primary), 10.0, 0), &mut host);
        drawer.handle_ui_event(&moved(60.0, 16), &mut host);
        assert_eq!(drawer.gesture_phase(), GesturePhase::Dragging);

        drawer.handle_ui_event(&PointerEvent::Cancel(info(1)), &mut host);
        assert_eq!(drawer.gesture_phase(), GesturePhase::Idle);
        assert_eq!(host.document_style, page);
        assert!(!drawer.open());
    }
}
