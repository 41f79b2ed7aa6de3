//! Alert Filter
//!
//! Purely presentational: toggles the active filter control and the visibility
//! of rendered alert cards. Data is never touched, and the result depends only on
//! the token and the cards currently in the document.

use crate::controller::state::{ViewState, FILTER_ALL};
use crate::dom::{ContainerId, Document, SEVERITY_ATTR};

/// Apply a filter token (`all` or an exact severity) to the alerts list
///
/// A token no filter control carries is ignored, leaving controls and cards as
/// they were. Returns the number of cards left visible.
pub fn apply_filter(state: &mut ViewState, doc: &mut Document, token: &str) -> usize {
    let controls = &doc.filter_controls;
    if !controls.is_empty() && !controls.iter().any(|c| c.token == token) {
        tracing::debug!(token, "Ignoring unknown filter token");
        return doc.alert_cards().iter().filter(|c| c.visible).count();
    }

    tracing::debug!(token, "Filtering alerts");

    for control in doc.filter_controls.iter_mut() {
        control.active = control.token == token;
    }
    state.active_filter = token.to_string();

    let Some(list) = doc.containers.get_mut(&ContainerId::AlertsList) else {
        return 0;
    };

    let mut shown = 0;
    for card in list.items.iter_mut() {
        card.visible = token == FILTER_ALL || card.get(SEVERITY_ATTR) == Some(token);
        if card.visible {
            shown += 1;
        }
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataStore, Severity};
    use crate::render::{populate, RenderContext};
    use chrono::Utc;

    fn rendered() -> (ViewState, Document) {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let mut doc = Document::standard();
        populate(&mut doc, ContainerId::AlertsList, &ctx);
        (ViewState::default(), doc)
    }

    fn active_controls(doc: &Document) -> Vec<&str> {
        doc.filter_controls
            .iter()
            .filter(|c| c.active)
            .map(|c| c.token.as_str())
            .collect()
    }

    #[test]
    fn test_filter_all_shows_every_card() {
        let (mut state, mut doc) = rendered();
        apply_filter(&mut state, &mut doc, "HIGH");

        let shown = apply_filter(&mut state, &mut doc, FILTER_ALL);
        assert_eq!(shown, 3);
        assert!(doc.alert_cards().iter().all(|c| c.visible));
        assert_eq!(active_controls(&doc), vec![FILTER_ALL]);
    }

    #[test]
    fn test_filter_by_severity() {
        let (mut state, mut doc) = rendered();

        for severity in Severity::all() {
            let token = severity.as_str();
            apply_filter(&mut state, &mut doc, token);

            for card in doc.alert_cards() {
                assert_eq!(card.visible, card.get(SEVERITY_ATTR) == Some(token));
            }
            assert_eq!(active_controls(&doc), vec![token]);
            assert_eq!(state.active_filter, token);
        }
    }

    #[test]
    fn test_filter_counts() {
        let (mut state, mut doc) = rendered();
        assert_eq!(apply_filter(&mut state, &mut doc, "MEDIUM"), 2);
        assert_eq!(apply_filter(&mut state, &mut doc, "LOW"), 0);
    }

    #[test]
    fn test_unknown_token_changes_nothing() {
        let (mut state, mut doc) = rendered();
        apply_filter(&mut state, &mut doc, "MEDIUM");

        for token in ["high", "bogus", ""] {
            assert_eq!(apply_filter(&mut state, &mut doc, token), 2);
            assert_eq!(active_controls(&doc), vec!["MEDIUM"]);
            assert_eq!(state.active_filter, "MEDIUM");
        }
    }

    #[test]
    fn test_filter_without_alerts_list() {
        let mut state = ViewState::default();
        let mut doc = Document::empty();
        assert_eq!(apply_filter(&mut state, &mut doc, "HIGH"), 0);
    }

    #[test]
    fn test_rerender_shows_cards_again() {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let (mut state, mut doc) = rendered();

        apply_filter(&mut state, &mut doc, "HIGH");
        populate(&mut doc, ContainerId::AlertsList, &ctx);

        assert!(doc.alert_cards().iter().all(|c| c.visible));
        assert_eq!(active_controls(&doc), vec!["HIGH"]);
    }
}
