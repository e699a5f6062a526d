//! Style appliers: named handlers over injected document and selection
//! state.

use crate::card::CardDocument;
use crate::color::CardColor;
use crate::selection::SelectionManager;

/// Apply a text color to the active layer.
///
/// Silent no-op (returns false) when nothing is selected or the active
/// reference points at a layer the document doesn't know.
pub fn apply_text_color(
    card: &mut CardDocument,
    selection: &SelectionManager,
    color: CardColor,
) -> bool {
    let Some(id) = selection.active() else {
        return false;
    };
    let Some(layer) = card.layer_mut(id) else {
        return false;
    };
    layer.color = Some(color);
    log::debug!("layer {id}: text color {}", color.to_css_hex());
    true
}

/// Apply a background color to the card (clears any background image).
pub fn apply_background_color(card: &mut CardDocument, color: CardColor) {
    card.set_background_color(color);
}

/// Apply an uploaded background image to the card (clears any
/// background color; cover sizing, centered).
pub fn apply_background_image(card: &mut CardDocument, data_url: impl Into<String>) {
    card.set_background_image(data_url);
}
