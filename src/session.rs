//! Dashboard Session
//!
//! Bundles one viewer's page: the shared read-only data store, the document,
//! the view state, the clock used for relative ages, and the event router.
//! Everything runs synchronously inside `dispatch`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::controller::{
    active_links, apply_filter, hide_modal, is_modal_open, navigate_to, show_modal,
    submit_form, Section, ViewState,
};
use crate::data::DataStore;
use crate::dom::{ContainerId, Document, FormId, LinkKind};
use crate::events::{Action, Event, EventKind, EventRouter};
use crate::render::{self, page, RenderContext};

/// Source of "now" for relative ages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(now) => *now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::System
    }
}

/// Result of dispatching one event
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub actions: Vec<Action>,
    /// Acknowledgment shown to the user, if any
    pub notice: Option<String>,
}

/// Serializable summary of the session's visible state
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_section: Section,
    pub logged_in: bool,
    pub active_filter: String,
    pub sidebar_visible: bool,
    pub modal_open: bool,
    pub active_links: Vec<String>,
    pub visible_alert_cards: usize,
    pub notice: Option<String>,
    pub scroll_target: Option<String>,
}

/// One viewer's dashboard
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<DataStore>,
    pub document: Document,
    pub state: ViewState,
    clock: Clock,
    router: EventRouter,
}

impl Session {
    /// A session on the standard page with the system clock
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            document: Document::standard(),
            state: ViewState::default(),
            clock: Clock::System,
            router: EventRouter::standard(),
        }
    }

    /// Builder method: use a different document
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    /// Builder method: use a different clock
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builder method: use a different dispatch table
    pub fn with_router(mut self, router: EventRouter) -> Self {
        self.router = router;
        self
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn shared_store(&self) -> Arc<DataStore> {
        Arc::clone(&self.store)
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Initial page load: show the landing page, fill pricing and every data
    /// container once
    pub fn start(&mut self) {
        let ctx = RenderContext::new(&self.store, self.clock.now());
        navigate_to(&mut self.state, &mut self.document, &ctx, Section::Landing.id());
        render::populate(&mut self.document, ContainerId::PricingGrid, &ctx);
        render::populate_all(&mut self.document, &ctx);
        tracing::debug!("Session started");
    }

    /// Navigate to a section by id; false if nothing happened
    pub fn navigate(&mut self, section_id: &str) -> bool {
        let ctx = RenderContext::new(&self.store, self.clock.now());
        navigate_to(&mut self.state, &mut self.document, &ctx, section_id)
    }

    /// Apply one action and return its acknowledgment message, if any
    pub fn apply(&mut self, action: &Action) -> Option<&'static str> {
        match action {
            Action::Navigate(section) => {
                self.navigate(section);
            }
            Action::AccessDashboard => {
                self.state.logged_in = true;
                self.navigate(Section::Dashboard.id());
            }
            Action::ShowModal => show_modal(&mut self.document),
            Action::HideModal => hide_modal(&mut self.document),
            Action::Filter(token) => {
                apply_filter(&mut self.state, &mut self.document, token);
            }
            Action::Submit(form) => return Some(submit_form(&mut self.document, *form)),
            Action::ScrollTo(id) => {
                if self.document.element_exists(id) {
                    self.document.scroll_target = Some(id.clone());
                }
            }
        }
        None
    }

    /// Route an event through the dispatch table and apply its actions
    pub fn dispatch(&mut self, event: &Event) -> DispatchOutcome {
        self.document.notice = None;

        if event.kind == EventKind::Submit {
            self.fill_submitted_form(event);
        }

        let actions = self.router.classify(event);
        let mut notice = None;
        for action in &actions {
            if let Some(message) = self.apply(action) {
                notice = Some(message.to_string());
            }
        }

        tracing::debug!(kind = ?event.kind, actions = actions.len(), "Event dispatched");
        DispatchOutcome { actions, notice }
    }

    /// Copy submitted values into the form, as the browser would hold them
    fn fill_submitted_form(&mut self, event: &Event) {
        let Some(form_id) = event
            .target
            .id
            .as_deref()
            .and_then(FormId::from_dom_id)
        else {
            return;
        };

        if let Some(form) = self.document.form_mut(form_id) {
            for (name, value) in &event.target.fields {
                form.set(name, value.clone());
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut links: Vec<String> = active_links(&self.document, LinkKind::Nav)
            .into_iter()
            .chain(active_links(&self.document, LinkKind::Sidebar))
            .map(str::to_string)
            .collect();
        links.dedup();

        SessionSnapshot {
            current_section: self.state.current_section,
            logged_in: self.state.logged_in,
            active_filter: self.state.active_filter.clone(),
            sidebar_visible: self.document.sidebar_hidden == Some(false),
            modal_open: is_modal_open(&self.document),
            active_links: links,
            visible_alert_cards: self
                .document
                .alert_cards()
                .iter()
                .filter(|c| c.visible)
                .count(),
            notice: self.document.notice.clone(),
            scroll_target: self.document.scroll_target.clone(),
        }
    }

    /// The full page as HTML
    pub fn render_page(&self, title: &str) -> String {
        page::render_page(&self.document, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ADD_COMPETITOR_ACK;
    use crate::events::Target;
    use chrono::TimeZone;

    fn session() -> Session {
        let now = Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap();
        let mut session = Session::new(Arc::new(DataStore::sample())).with_clock(Clock::Fixed(now));
        session.start();
        session
    }

    fn click(session: &mut Session, target: Target) -> DispatchOutcome {
        session.dispatch(&Event::click(target))
    }

    #[test]
    fn test_start_shows_landing_with_everything_rendered() {
        let session = session();
        assert_eq!(session.document.active_sections(), vec![Section::Landing]);
        assert!(!session.state.logged_in);
        for id in ContainerId::all() {
            assert_eq!(session.document.container(*id).map(|c| c.render_count), Some(1));
        }
        assert_eq!(session.snapshot().visible_alert_cards, 3);
    }

    #[test]
    fn test_access_dashboard() {
        let mut session = session();
        let outcome = click(&mut session, Target::with_id("accessDashboard"));

        assert_eq!(outcome.actions, vec![Action::AccessDashboard]);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_section, Section::Dashboard);
        assert!(snapshot.logged_in);
        assert!(snapshot.sidebar_visible);
        assert_eq!(snapshot.active_links, vec!["dashboard".to_string()]);
    }

    #[test]
    fn test_sidebar_click_then_home() {
        let mut session = session();
        click(
            &mut session,
            Target::new().class("sidebar-link").data("section", "competitors"),
        );
        assert!(session.state.logged_in);

        click(&mut session, Target::new().class("nav-link").data("section", "landing"));
        let snapshot = session.snapshot();
        assert!(!snapshot.logged_in);
        assert!(!snapshot.sidebar_visible);
        assert_eq!(snapshot.current_section, Section::Landing);
    }

    #[test]
    fn test_add_competitor_flow() {
        let mut session = session();
        click(&mut session, Target::with_id("addCompetitorBtn"));
        assert!(session.snapshot().modal_open);

        let submit = Target::with_id("addCompetitorForm")
            .field("competitorName", "Rival Motors")
            .field("competitorWebsite", "rival.example");
        let outcome = session.dispatch(&Event::submit(submit));

        assert_eq!(outcome.notice.as_deref(), Some(ADD_COMPETITOR_ACK));
        assert!(!session.snapshot().modal_open);
        assert!(session.document.form(FormId::AddCompetitor).unwrap().is_clear());
        assert_eq!(session.store().competitors.len(), 3);
    }

    #[test]
    fn test_backdrop_and_cancel_close_modal() {
        let mut session = session();
        for closer in ["addCompetitorModal", "cancelModal", "closeModal"] {
            click(&mut session, Target::with_id("addCompetitorBtn"));
            click(&mut session, Target::with_id(closer));
            assert!(!session.snapshot().modal_open, "{} should close the modal", closer);
        }
    }

    #[test]
    fn test_filter_through_router() {
        let mut session = session();
        click(&mut session, Target::new().class("sidebar-link").data("section", "alerts"));
        click(&mut session, Target::new().class("filter-btn").data("filter", "MEDIUM"));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.active_filter, "MEDIUM");
        assert_eq!(snapshot.visible_alert_cards, 2);
    }

    #[test]
    fn test_scroll_only_to_existing_anchor() {
        let mut session = session();
        click(&mut session, Target::new().href("#missing"));
        assert_eq!(session.snapshot().scroll_target, None);

        click(&mut session, Target::new().href("#contact"));
        assert_eq!(session.snapshot().scroll_target.as_deref(), Some("contact"));
    }

    #[test]
    fn test_notice_clears_on_next_event() {
        let mut session = session();
        session.dispatch(&Event::submit(Target::with_id("contactForm")));
        assert!(session.snapshot().notice.is_some());

        click(&mut session, Target::with_id("nothing"));
        assert!(session.snapshot().notice.is_none());
    }

    #[test]
    fn test_injected_router() {
        let router = EventRouter::new().route(
            EventKind::Click,
            crate::events::TargetMatcher::Id("logo"),
            |_| Some(Action::Navigate("reports".to_string())),
        );
        let mut session = session().with_router(router);

        click(&mut session, Target::with_id("accessDashboard"));
        assert_eq!(session.state.current_section, Section::Landing);

        click(&mut session, Target::with_id("logo"));
        assert_eq!(session.state.current_section, Section::Reports);
    }

    #[test]
    fn test_rendered_page_reflects_session() {
        let mut session = session();
        click(&mut session, Target::with_id("accessDashboard"));
        let html = session.render_page("Black Fang Intelligence");

        assert!(html.contains(r#"<section id="dashboard" class="section active">"#));
        assert!(html.contains("new Chart"));
        assert!(html.contains("1h ago"));
    }
}
