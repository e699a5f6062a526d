//! CardCraft Core Library
//!
//! Document model and interaction logic for the CardCraft card editor:
//! the card document (background + text layers), the single-selection
//! manager, the drag controller, and the style appliers. Everything here
//! is host-agnostic; the hosting shell dispatches pointer and control
//! events into these types.

pub mod background;
pub mod card;
pub mod color;
pub mod drag;
pub mod input;
pub mod layer;
pub mod selection;
pub mod style;

pub use background::{Background, BackgroundImage, BackgroundPosition, BackgroundSize, ImageFormat};
pub use card::CardDocument;
pub use color::CardColor;
pub use drag::DragController;
pub use input::{MouseButton, PointerEvent};
pub use layer::{LayerId, Positioning, TextLayer};
pub use selection::SelectionManager;
