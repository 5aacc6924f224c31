//! Input events relayed by the host: keys and a single pointer.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Key identifier for "previous variant".
pub const KEY_PREVIOUS: &str = "ArrowLeft";

/// Key identifier for "next variant".
pub const KEY_NEXT: &str = "ArrowRight";

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    pub fn key(&self) -> &str {
        match self {
            KeyEvent::Pressed(key) | KeyEvent::Released(key) => key,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, KeyEvent::Pressed(_))
    }
}

/// Compare key identifiers the way browsers report them to `toLowerCase()`.
pub fn key_matches(key: &str, expected: &str) -> bool {
    key.eq_ignore_ascii_case(expected)
}

/// Pointer event in absolute (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

/// Translate an absolute position into coordinates local to `container`.
pub fn to_local(position: Point, container: Rect) -> Point {
    Point::new(position.x - container.x0, position.y - container.y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_ignores_case() {
        assert!(key_matches("P", "p"));
        assert!(key_matches("arrowleft", KEY_PREVIOUS));
        assert!(!key_matches("o", "p"));
    }

    #[test]
    fn test_key_event_accessors() {
        let event = KeyEvent::Released("p".to_string());
        assert_eq!(event.key(), "p");
        assert!(!event.is_pressed());
    }

    #[test]
    fn test_to_local() {
        let container = Rect::new(40.0, 60.0, 680.0, 540.0);
        let event = PointerEvent::Move {
            position: Point::new(50.0, 70.0),
        };
        assert_eq!(to_local(event.position(), container), Point::new(10.0, 10.0));
    }
}
