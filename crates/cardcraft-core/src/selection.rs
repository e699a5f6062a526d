//! Selection manager: tracks which text layer is active.

use crate::layer::LayerId;
use std::collections::HashSet;

/// Tracks the single active text layer and its visual highlight.
///
/// Invariant: at most one layer is highlighted at any time, and the
/// highlighted layer always equals the active reference.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The active layer, if any.
    active: Option<LayerId>,
    /// Layers carrying the highlight. Kept as a set so clearing sweeps
    /// everything even if external code ever disagrees with `active`.
    highlighted: HashSet<LayerId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a layer: clear every highlight, highlight this one, and
    /// update the active reference.
    pub fn select_layer(&mut self, id: LayerId) {
        self.highlighted.clear();
        self.highlighted.insert(id);
        self.active = Some(id);
        log::debug!("selected layer {id}");
    }

    /// Clear the highlight from all layers and reset the active
    /// reference.
    pub fn clear_selection(&mut self) {
        if self.active.is_some() {
            log::debug!("selection cleared");
        }
        self.highlighted.clear();
        self.active = None;
    }

    /// The active layer, if any.
    pub fn active(&self) -> Option<LayerId> {
        self.active
    }

    /// Whether a layer currently carries the highlight.
    pub fn is_highlighted(&self, id: LayerId) -> bool {
        self.highlighted.contains(&id)
    }

    /// Number of highlighted layers (0 or 1 when the invariant holds).
    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }
}
