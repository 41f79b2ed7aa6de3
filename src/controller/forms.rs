//! Form Handlers
//!
//! Submissions are simulated: nothing is validated, stored or sent. Each handler
//! shows a fixed acknowledgment and clears the form.

use crate::controller::modal::hide_modal;
use crate::dom::{Document, FormId};

pub const ADD_COMPETITOR_ACK: &str = "Competitor added successfully! (This is a demo)";
pub const CONTACT_ACK: &str = "Thank you for your message! Our team will contact you soon.";

/// Handle a submitted form and return the acknowledgment shown to the user
pub fn submit_form(doc: &mut Document, form: FormId) -> &'static str {
    let message = match form {
        FormId::AddCompetitor => {
            hide_modal(doc);
            ADD_COMPETITOR_ACK
        }
        FormId::Contact => CONTACT_ACK,
    };

    if let Some(fields) = doc.form_mut(form) {
        fields.reset();
    }
    doc.notice = Some(message.to_string());

    tracing::debug!(form = form.dom_id(), "Form submitted (simulated)");
    message
}
