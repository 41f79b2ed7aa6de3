//! Modal Toggle
//!
//! Shows and hides the add-competitor modal. No state survives between cycles.

use crate::dom::Document;

pub fn show_modal(doc: &mut Document) {
    if let Some(hidden) = doc.modal_hidden.as_mut() {
        *hidden = false;
        tracing::debug!("Modal shown");
    }
}

pub fn hide_modal(doc: &mut Document) {
    if let Some(hidden) = doc.modal_hidden.as_mut() {
        *hidden = true;
        tracing::debug!("Modal hidden");
    }
}

pub fn is_modal_open(doc: &Document) -> bool {
    doc.modal_hidden == Some(false)
}
