//! Drag controller for repositioning text layers.

use kurbo::{Point, Vec2};

/// Captured state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer offset relative to the layer's own top-left corner,
    /// captured at drag start so the layer doesn't jump under the
    /// cursor.
    offset: Vec2,
}

/// Pointer-driven drag state machine.
///
/// One controller is shared across all layers; starting a drag replaces
/// any previous session, so at most one layer drags at a time. Which
/// layer receives position writes is decided by the selection, not by
/// this controller.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging: capture the pointer offset relative to the
    /// layer's box. Both points are in page coordinates.
    pub fn begin(&mut self, pointer: Point, layer_page_origin: Point) {
        let offset = Vec2::new(
            pointer.x - layer_page_origin.x,
            pointer.y - layer_page_origin.y,
        );
        self.session = Some(DragSession { offset });
        log::debug!("drag started, offset {:?}", offset);
    }

    /// Whether a drag session is live.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// New card-relative position for the dragged layer:
    /// pointer − canvas origin − captured offset.
    /// Returns `None` when no drag is in progress.
    pub fn position_for(&self, pointer: Point, canvas_origin: Point) -> Option<Point> {
        self.session.map(|session| {
            Point::new(
                pointer.x - canvas_origin.x - session.offset.x,
                pointer.y - canvas_origin.y - session.offset.y,
            )
        })
    }

    /// End the drag unconditionally, wherever the pointer was released.
    pub fn end(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let mut drag = DragController::new();
        // Layer at page (140, 90), grabbed at (145, 95) -> offset (5, 5).
        drag.begin(Point::new(145.0, 95.0), Point::new(140.0, 90.0));

        // Canvas origin (100, 50); pointer moves to (200, 150).
        let pos = drag
            .position_for(Point::new(200.0, 150.0), Point::new(100.0, 50.0))
            .unwrap();
        assert_eq!(pos, Point::new(95.0, 95.0));
    }

    #[test]
    fn test_no_position_without_session() {
        let drag = DragController::new();
        assert!(drag.position_for(Point::ZERO, Point::ZERO).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_end_is_unconditional() {
        let mut drag = DragController::new();
        drag.begin(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        assert!(drag.is_dragging());

        drag.end();
        assert!(!drag.is_dragging());
        assert!(drag.position_for(Point::new(50.0, 50.0), Point::ZERO).is_none());

        // Ending again stays quiet.
        drag.end();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_new_drag_replaces_old_session() {
        let mut drag = DragController::new();
        drag.begin(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        drag.begin(Point::new(100.0, 100.0), Point::new(100.0, 100.0));

        // Offset comes from the second begin (zero offset).
        let pos = drag
            .position_for(Point::new(120.0, 130.0), Point::ZERO)
            .unwrap();
        assert_eq!(pos, Point::new(120.0, 130.0));
    }
}
