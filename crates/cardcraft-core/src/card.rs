//! Card document: the canvas whose rendered appearance gets exported.

use crate::background::{Background, BackgroundImage};
use crate::color::CardColor;
use crate::layer::{LayerId, TextLayer};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The card being edited.
///
/// There is exactly one document per editor session. The hosting
/// template creates it (with its text layers) at init; event handlers
/// only read and write visual attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Card size in pixels.
    pub size: Size,
    /// Top-left corner of the card within the hosting page, in page
    /// coordinates. Drag math subtracts this to produce card-relative
    /// positions.
    pub origin: Point,
    /// Background fill.
    pub background: Background,
    /// All text layers, keyed by ID.
    pub layers: HashMap<LayerId, TextLayer>,
    /// Template order of layers (back to front).
    pub order: Vec<LayerId>,
}

impl CardDocument {
    /// Default card size in pixels (landscape greeting card).
    pub const DEFAULT_SIZE: Size = Size::new(600.0, 400.0);

    /// Create a new empty card.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            size: Self::DEFAULT_SIZE,
            origin: Point::ZERO,
            background: Background::default(),
            layers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Place the card within the hosting page.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Add a text layer (template initialization only).
    pub fn add_layer(&mut self, layer: TextLayer) -> LayerId {
        let id = layer.id();
        self.order.push(id);
        self.layers.insert(id, layer);
        id
    }

    /// Get a layer by ID.
    pub fn layer(&self, id: LayerId) -> Option<&TextLayer> {
        self.layers.get(&id)
    }

    /// Get a mutable reference to a layer by ID.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut TextLayer> {
        self.layers.get_mut(&id)
    }

    /// Layers in template order (back to front).
    pub fn layers_ordered(&self) -> impl Iterator<Item = &TextLayer> {
        self.order.iter().filter_map(|id| self.layers.get(id))
    }

    /// The card's bounding box in page coordinates.
    pub fn page_bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Convert a page-space point to card-relative coordinates.
    pub fn to_card_point(&self, page_point: Point) -> Point {
        Point::new(page_point.x - self.origin.x, page_point.y - self.origin.y)
    }

    /// Find the frontmost layer at a page-space point, if any.
    pub fn layer_at_point(&self, page_point: Point) -> Option<LayerId> {
        let point = self.to_card_point(page_point);
        self.order
            .iter()
            .rev()
            .find(|id| {
                self.layers
                    .get(*id)
                    .map(|layer| layer.hit_test(point))
                    .unwrap_or(false)
            })
            .copied()
    }

    /// Set a solid background color, clearing any background image.
    pub fn set_background_color(&mut self, color: CardColor) {
        log::debug!("card {}: background color {}", self.id, color.to_css_hex());
        self.background = Background::Color(color);
    }

    /// Set an uploaded background image (cover sizing, centered),
    /// clearing any background color.
    pub fn set_background_image(&mut self, data_url: impl Into<String>) {
        log::debug!("card {}: background image set", self.id);
        self.background = Background::Image(BackgroundImage::new(data_url));
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
