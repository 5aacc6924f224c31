//! Translation of egui input events into gallery events.

use egui::{Event, PointerButton};
use statedeck_core::{KeyEvent, PointerEvent};
use statedeck_widgets::to_point;

/// Convert an egui key event. Auto-repeated presses are dropped.
pub fn key_event(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key {
            key,
            pressed,
            repeat,
            ..
        } => {
            let name = key.name().to_string();
            if !*pressed {
                Some(KeyEvent::Released(name))
            } else if !*repeat {
                Some(KeyEvent::Pressed(name))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Convert an egui pointer event. Only the primary button drags.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match event {
        Event::PointerMoved(pos) => Some(PointerEvent::Move {
            position: to_point(*pos),
        }),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } => {
            let position = to_point(*pos);
            Some(if *pressed {
                PointerEvent::Down { position }
            } else {
                PointerEvent::Up { position }
            })
        }
        _ => None,
    }
}
