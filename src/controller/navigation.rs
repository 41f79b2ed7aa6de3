//! Navigation Controller
//!
//! Moves the session between sections. Entering a gated section counts as being
//! logged in and shows the sidebar; entering the landing page clears both. Data
//! sections are re-rendered on every visit.

use crate::controller::state::{Section, ViewState};
use crate::dom::{Document, LinkKind};
use crate::render::{self, RenderContext};

/// Navigate to the section named `section_id`
///
/// Unknown ids and sections missing from the document are a no-op. Returns true
/// when the navigation happened.
pub fn navigate_to(
    state: &mut ViewState,
    doc: &mut Document,
    ctx: &RenderContext<'_>,
    section_id: &str,
) -> bool {
    let Ok(section) = section_id.parse::<Section>() else {
        tracing::debug!(section = section_id, "Ignoring navigation to unknown section");
        return false;
    };
    if !doc.has_section(section) {
        tracing::debug!(%section, "Ignoring navigation, section not in document");
        return false;
    }

    tracing::debug!(from = %state.current_section, to = %section, "Navigating");

    if section.is_gated() {
        state.logged_in = true;
        set_sidebar(doc, true);
    } else {
        state.logged_in = false;
        set_sidebar(doc, false);
    }

    show_section(state, doc, ctx, section);
    update_active_links(doc, section);
    true
}

/// Mark exactly one section active and refresh its data
fn show_section(
    state: &mut ViewState,
    doc: &mut Document,
    ctx: &RenderContext<'_>,
    section: Section,
) {
    for (s, active) in doc.sections.iter_mut() {
        *active = *s == section;
    }
    state.current_section = section;

    if section != Section::Landing {
        render::populate_section(doc, section, ctx);
    }
}

fn set_sidebar(doc: &mut Document, visible: bool) {
    if let Some(hidden) = doc.sidebar_hidden.as_mut() {
        *hidden = !visible;
    }
    if let Some(with_sidebar) = doc.main_with_sidebar.as_mut() {
        *with_sidebar = visible;
    }
}

fn update_active_links(doc: &mut Document, section: Section) {
    for link in doc.links.iter_mut() {
        link.active = link.section == section.id();
    }
}

/// Links of a kind that currently carry the active marker
pub fn active_links(doc: &Document, kind: LinkKind) -> Vec<&str> {
    doc.links
        .iter()
        .filter(|l| l.kind == kind && l.active)
        .map(|l| l.section.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use crate::dom::ContainerId;
    use chrono::Utc;

    fn setup() -> (DataStore, ViewState, Document) {
        (DataStore::sample(), ViewState::default(), Document::standard())
    }

    #[test]
    fn test_exactly_one_section_active() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());

        for section in Section::all() {
            assert!(navigate_to(&mut state, &mut doc, &ctx, section.id()));
            assert_eq!(doc.active_sections(), vec![*section]);
            assert_eq!(state.current_section, *section);
        }
    }

    #[test]
    fn test_login_flag_and_sidebar() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());

        for section in Section::all().iter().filter(|s| s.is_gated()) {
            navigate_to(&mut state, &mut doc, &ctx, "landing");
            assert!(!state.logged_in);
            assert_eq!(doc.sidebar_hidden, Some(true));
            assert_eq!(doc.main_with_sidebar, Some(false));

            navigate_to(&mut state, &mut doc, &ctx, section.id());
            assert!(state.logged_in);
            assert_eq!(doc.sidebar_hidden, Some(false));
            assert_eq!(doc.main_with_sidebar, Some(true));
        }
    }

    #[test]
    fn test_active_links_follow_section() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());

        navigate_to(&mut state, &mut doc, &ctx, "reports");
        assert_eq!(active_links(&doc, LinkKind::Nav), vec!["reports"]);
        assert_eq!(active_links(&doc, LinkKind::Sidebar), vec!["reports"]);

        navigate_to(&mut state, &mut doc, &ctx, "settings");
        assert!(active_links(&doc, LinkKind::Nav).is_empty());
        assert_eq!(active_links(&doc, LinkKind::Sidebar), vec!["settings"]);
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());
        navigate_to(&mut state, &mut doc, &ctx, "alerts");
        let before = (state.clone(), doc.clone());

        assert!(!navigate_to(&mut state, &mut doc, &ctx, "pricing"));
        assert_eq!((state, doc), before);
    }

    #[test]
    fn test_missing_section_container_is_noop() {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let mut state = ViewState::default();
        let mut doc = Document::empty().with_section(Section::Landing);

        assert!(!navigate_to(&mut state, &mut doc, &ctx, "dashboard"));
        assert!(!state.logged_in);
        assert_eq!(state.current_section, Section::Landing);
    }

    #[test]
    fn test_every_visit_rerenders() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());

        navigate_to(&mut state, &mut doc, &ctx, "alerts");
        navigate_to(&mut state, &mut doc, &ctx, "landing");
        navigate_to(&mut state, &mut doc, &ctx, "alerts");

        let count = doc.container(ContainerId::AlertsList).map(|c| c.render_count);
        assert_eq!(count, Some(2));
    }

    #[test]
    fn test_dashboard_twice_creates_one_chart() {
        let (store, mut state, mut doc) = setup();
        let ctx = RenderContext::new(&store, Utc::now());

        navigate_to(&mut state, &mut doc, &ctx, "dashboard");
        navigate_to(&mut state, &mut doc, &ctx, "dashboard");

        let canvas = doc.canvas.as_ref().unwrap();
        assert!(canvas.chart.is_some());
        assert_eq!(canvas.instances_created, 1);
        assert_eq!(
            doc.container(ContainerId::DashboardAlerts).map(|c| c.render_count),
            Some(2)
        );
    }
}
