//! CardCraft application layer.
//!
//! Wires host events (pointer, click, control inputs, file reads) into
//! the core document, selection, and drag state, and triggers exports.
//! Also carries the page-affordance component, which is independent of
//! the editor.

pub mod affordance;
pub mod session;

pub use affordance::{
    Haptics, PAGE_ENTER_CLASS, PAGE_HIDDEN_CLASS, PageAffordance, TAP_PULSE, TAP_TARGET_CLASSES,
    TapFeedback,
};
pub use session::{Controls, EditorSession, FileReadToken};
