//! Editor session: host events wired into core editor state.

use cardcraft_core::{
    CardColor, CardDocument, DragController, MouseButton, PointerEvent, SelectionManager,
    background, style,
};
use cardcraft_export::{ExportError, ExportOutcome, Rasterizer, pipeline};
use kurbo::Point;
use std::collections::HashSet;

/// Which optional host controls exist in the hosting layout.
///
/// A missing control means the corresponding handler is simply never
/// wired up: calls for it become silent no-ops, never faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub text_color: bool,
    pub background_color: bool,
    pub background_image: bool,
    pub export_png: bool,
    pub export_pdf: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            text_color: true,
            background_color: true,
            background_image: true,
            export_png: true,
            export_pdf: true,
        }
    }
}

impl Controls {
    /// A layout providing none of the optional controls.
    pub fn none() -> Self {
        Self {
            text_color: false,
            background_color: false,
            background_image: false,
            export_png: false,
            export_pdf: false,
        }
    }
}

/// Handle for an in-flight background-image file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileReadToken(u64);

/// One editor session: the card under edit plus all transient
/// interaction state. Lives for the page session and is discarded on
/// navigation.
#[derive(Debug, Default)]
pub struct EditorSession {
    /// The card, if the hosting markup provides one. Absent card means
    /// exports and edits silently do nothing.
    card: Option<CardDocument>,
    controls: Controls,
    selection: SelectionManager,
    drag: DragController,
    /// Tokens of file reads the host has not completed yet. Reads are
    /// never cancelled; whichever completes last wins.
    pending_reads: HashSet<u64>,
    next_read_token: u64,
}

impl EditorSession {
    /// Create a session over the card the template provided (if any).
    pub fn new(card: Option<CardDocument>) -> Self {
        Self {
            card,
            ..Self::default()
        }
    }

    /// Restrict the session to the controls the layout actually has.
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn card(&self) -> Option<&CardDocument> {
        self.card.as_ref()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Number of file reads still in flight.
    pub fn pending_reads(&self) -> usize {
        self.pending_reads.len()
    }

    // ------------------------------------------------------------------
    // Pointer and click events
    // ------------------------------------------------------------------

    /// A click, as resolved by the host's own down/up pairing. A click
    /// on a text layer selects it (the layer handler stops propagation,
    /// so the document-level clear never runs); a click anywhere else
    /// clears the selection.
    pub fn click(&mut self, position: Point) {
        let hit = self
            .card
            .as_ref()
            .and_then(|card| card.layer_at_point(position));
        match hit {
            Some(id) => self.selection.select_layer(id),
            None => self.selection.clear_selection(),
        }
    }

    /// Pointer pressed. On a text layer this selects it, promotes it to
    /// absolute positioning (one-time), and starts a drag with the
    /// pointer offset captured against the layer's own box.
    pub fn pointer_down(&mut self, position: Point) {
        let Some(card) = self.card.as_mut() else {
            return;
        };
        let Some(id) = card.layer_at_point(position) else {
            return;
        };

        let card_origin = card.origin;
        if let Some(layer) = card.layer_mut(id) {
            layer.promote_to_absolute();
            let layer_page_origin = Point::new(
                card_origin.x + layer.origin().x,
                card_origin.y + layer.origin().y,
            );
            self.drag.begin(position, layer_page_origin);
        }
        self.selection.select_layer(id);
    }

    /// Pointer moved anywhere in the page. Repositions the active layer
    /// while a drag is live; no-op otherwise, including when the
    /// selection was cleared mid-drag.
    pub fn pointer_move(&mut self, position: Point) {
        if !self.drag.is_dragging() {
            return;
        }
        let Some(active) = self.selection.active() else {
            return;
        };
        let Some(card) = self.card.as_mut() else {
            return;
        };

        if let Some(new_position) = self.drag.position_for(position, card.origin) {
            if let Some(layer) = card.layer_mut(active) {
                layer.set_position(new_position);
            }
        }
    }

    /// Pointer released anywhere; unconditionally ends the drag.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Dispatch a raw pointer event. Only the left button starts or
    /// ends drags.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.pointer_up(),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => {}
        }
    }

    // ------------------------------------------------------------------
    // Control inputs
    // ------------------------------------------------------------------

    /// Text color control changed. No-op without the control, a card,
    /// or an active selection. Returns whether a layer changed.
    pub fn text_color_input(&mut self, color: CardColor) -> bool {
        if !self.controls.text_color {
            return false;
        }
        let Some(card) = self.card.as_mut() else {
            return false;
        };
        style::apply_text_color(card, &self.selection, color)
    }

    /// Background color control changed. Clears any background image.
    pub fn background_color_input(&mut self, color: CardColor) -> bool {
        if !self.controls.background_color {
            return false;
        }
        let Some(card) = self.card.as_mut() else {
            return false;
        };
        style::apply_background_color(card, color);
        true
    }

    /// The background image input changed. With no file chosen this is
    /// a no-op; otherwise a read token is issued for the host to
    /// complete once the file bytes are available.
    pub fn begin_background_image_read(&mut self, file_chosen: bool) -> Option<FileReadToken> {
        if !self.controls.background_image || !file_chosen {
            return None;
        }
        let token = self.next_read_token;
        self.next_read_token += 1;
        self.pending_reads.insert(token);
        log::debug!("background image read {} started", token);
        Some(FileReadToken(token))
    }

    /// A background-image read completed. Applies unconditionally:
    /// whichever read completes last wins, regardless of start order.
    /// Unknown tokens (double completion) are ignored.
    pub fn background_image_loaded(&mut self, token: FileReadToken, data: &[u8]) -> bool {
        if !self.pending_reads.remove(&token.0) {
            return false;
        }
        let Some(card) = self.card.as_mut() else {
            return false;
        };
        let data_url = background::encode_data_url(data);
        style::apply_background_image(card, data_url);
        log::debug!("background image read {} applied", token.0);
        true
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Export the card as `card.png`. Skipped when the export button or
    /// the card is absent.
    pub fn export_png<R, S>(
        &self,
        rasterizer: &R,
        sink: &mut S,
    ) -> Result<ExportOutcome, ExportError>
    where
        R: Rasterizer + ?Sized,
        S: pipeline::DownloadSink + ?Sized,
    {
        if !self.controls.export_png {
            return Ok(ExportOutcome::Skipped);
        }
        let outcome = pipeline::export_png(self.card.as_ref(), rasterizer, sink);
        if let Err(error) = &outcome {
            log::error!("PNG export failed: {error}");
        }
        outcome
    }

    /// Export the card as `card.pdf`. Skipped when the export button or
    /// the card is absent.
    pub fn export_pdf<R, S>(
        &self,
        rasterizer: &R,
        sink: &mut S,
    ) -> Result<ExportOutcome, ExportError>
    where
        R: Rasterizer + ?Sized,
        S: pipeline::DownloadSink + ?Sized,
    {
        if !self.controls.export_pdf {
            return Ok(ExportOutcome::Skipped);
        }
        let outcome = pipeline::export_pdf(self.card.as_ref(), rasterizer, sink);
        if let Err(error) = &outcome {
            log::error!("PDF export failed: {error}");
        }
        outcome
    }
}
