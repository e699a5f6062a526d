//! Pointer event vocabulary consumed by the editor session.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in page coordinates.
///
/// The hosting shell translates its native events into these. Click is
/// delivered separately by the host (after its own down/up pairing), so
/// it is not part of this enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    /// The pointer position carried by this event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let event = PointerEvent::Down {
            position: Point::new(3.0, 4.0),
            button: MouseButton::Left,
        };
        assert_eq!(event.position(), Point::new(3.0, 4.0));

        let event = PointerEvent::Move {
            position: Point::new(7.0, 8.0),
        };
        assert_eq!(event.position(), Point::new(7.0, 8.0));
    }
}
