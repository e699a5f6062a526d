//! Editable text layers.

use crate::color::CardColor;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a text layer.
pub type LayerId = Uuid;

/// How a layer is positioned within the card.
///
/// Layers start out where the hosting template laid them out. The first
/// drag promotes them to absolute positioning; from then on left/top
/// writes take effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Positioning {
    /// Template flow position; position writes are ignored.
    Static,
    /// Absolute offset from the card's top-left corner, in pixels.
    Absolute(Point),
}

/// An editable text layer on the card.
///
/// Layers are created once from the template at session start; event
/// handlers only mutate their visual attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLayer {
    pub(crate) id: LayerId,
    /// The text content.
    pub content: String,
    /// Text color. `None` means the template default applies.
    pub color: Option<CardColor>,
    /// Font size in pixels.
    pub font_size: f64,
    /// Where the template placed this layer (card-relative pixels).
    pub layout_origin: Point,
    /// Current positioning mode.
    pub positioning: Positioning,
}

impl TextLayer {
    /// Default font size in pixels.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Average character width as a fraction of the font size.
    /// Rough estimate; actual width depends on the template's font.
    const CHAR_WIDTH_FACTOR: f64 = 0.55;

    /// Create a new text layer at its template position.
    pub fn new(layout_origin: Point, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            color: None,
            font_size: Self::DEFAULT_FONT_SIZE,
            layout_origin,
            positioning: Positioning::Static,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer's current top-left corner (card-relative pixels).
    pub fn origin(&self) -> Point {
        match self.positioning {
            Positioning::Static => self.layout_origin,
            Positioning::Absolute(point) => point,
        }
    }

    /// Switch to absolute positioning so position writes take effect.
    /// One-time and idempotent: an already-absolute layer keeps its
    /// current position.
    pub fn promote_to_absolute(&mut self) {
        if self.positioning == Positioning::Static {
            self.positioning = Positioning::Absolute(self.layout_origin);
        }
    }

    /// Write the layer's absolute position. Ignored while the layer is
    /// still in template flow.
    pub fn set_position(&mut self, position: Point) {
        if let Positioning::Absolute(_) = self.positioning {
            self.positioning = Positioning::Absolute(position);
        }
    }

    /// Approximate width based on the widest line and font size.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    /// Approximate height based on line count and font size.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        // Line height is typically 1.2 * font_size
        line_count as f64 * self.font_size * 1.2
    }

    /// Approximate bounding box (card-relative pixels).
    pub fn bounds(&self) -> Rect {
        let origin = self.origin();
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.approximate_width().max(20.0),
            origin.y + self.approximate_height(),
        )
    }

    /// Check whether a card-relative point falls on this layer.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_creation() {
        let layer = TextLayer::new(Point::new(40.0, 60.0), "Happy Birthday");
        assert_eq!(layer.content, "Happy Birthday");
        assert!(layer.color.is_none());
        assert_eq!(layer.positioning, Positioning::Static);
        assert_eq!(layer.origin(), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_position_write_ignored_while_static() {
        let mut layer = TextLayer::new(Point::new(40.0, 60.0), "Hi");
        layer.set_position(Point::new(0.0, 0.0));
        assert_eq!(layer.origin(), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_promote_is_idempotent() {
        let mut layer = TextLayer::new(Point::new(40.0, 60.0), "Hi");
        layer.promote_to_absolute();
        layer.set_position(Point::new(10.0, 20.0));
        // A second promotion must not snap back to the layout origin.
        layer.promote_to_absolute();
        assert_eq!(layer.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_hit_test() {
        let layer = TextLayer::new(Point::new(100.0, 100.0), "Hello World");
        let bounds = layer.bounds();
        assert!(layer.hit_test(bounds.center()));
        assert!(!layer.hit_test(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_bounds_track_position() {
        let mut layer = TextLayer::new(Point::new(0.0, 0.0), "Hi");
        layer.promote_to_absolute();
        layer.set_position(Point::new(50.0, 70.0));
        let bounds = layer.bounds();
        assert!((bounds.x0 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 70.0).abs() < f64::EPSILON);
    }
}
