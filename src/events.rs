//! Event Router
//!
//! An explicit dispatch table from (event kind, target descriptor) to a handler.
//! A handler inspects the event target and produces an [`Action`] for the
//! session to apply. Tables can be built by hand, so tests can route events
//! without a real page.
//!
//! Every matching route fires, in table order, the same way several checks in a
//! single delegated listener can all match one click.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dom::{FormId, MODAL_ID};

/// Kind of user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Submit,
}

/// Description of the element an event fired on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed with their `data-` prefix
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub href: Option<String>,
    /// Field values of a submitted form
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Target {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target identified by element id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Builder method: add a class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Builder method: add a `data-*` attribute (name given without the prefix)
    pub fn data(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(format!("data-{}", name), value.into());
        self
    }

    /// Builder method: set the link target
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Builder method: set a submitted field value
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of a `data-*` attribute (name given without the prefix)
    pub fn data_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&format!("data-{}", name))
            .map(String::as_str)
    }

    fn id_is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub target: Target,
}

impl Event {
    pub fn click(target: Target) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    pub fn submit(target: Target) -> Self {
        Self {
            kind: EventKind::Submit,
            target,
        }
    }
}

/// What a handler asks the session to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    Navigate(String),
    AccessDashboard,
    ShowModal,
    HideModal,
    Filter(String),
    Submit(FormId),
    ScrollTo(String),
}

/// Which targets a route applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMatcher {
    /// Element with this id
    Id(&'static str),
    /// Element carrying any of these classes
    Class(&'static [&'static str]),
    /// Link whose href is an in-page anchor (`#something`)
    AnchorLink,
}

impl TargetMatcher {
    pub fn matches(&self, target: &Target) -> bool {
        match self {
            TargetMatcher::Id(id) => target.id_is(id),
            TargetMatcher::Class(classes) => classes.iter().any(|c| target.has_class(c)),
            TargetMatcher::AnchorLink => target
                .href
                .as_deref()
                .is_some_and(|h| h.len() > 1 && h.starts_with('#')),
        }
    }
}

/// Turns a matched target into an action, or nothing
pub type Handler = fn(&Target) -> Option<Action>;

/// One row of the dispatch table
#[derive(Clone)]
pub struct Route {
    pub kind: EventKind,
    pub matcher: TargetMatcher,
    pub handler: Handler,
}

/// The dispatch table
#[derive(Clone, Default)]
pub struct EventRouter {
    routes: Vec<Route>,
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("routes", &self.routes.len())
            .finish()
    }
}

impl EventRouter {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: append a route
    pub fn route(mut self, kind: EventKind, matcher: TargetMatcher, handler: Handler) -> Self {
        self.routes.push(Route {
            kind,
            matcher,
            handler,
        });
        self
    }

    /// The dashboard's own table
    pub fn standard() -> Self {
        use EventKind::{Click, Submit};
        use TargetMatcher::{AnchorLink, Class, Id};

        Self::new()
            .route(Click, Class(&["nav-link", "sidebar-link"]), |t| {
                t.data_attr("section").map(|s| Action::Navigate(s.to_string()))
            })
            .route(Click, Id("accessDashboard"), |_| Some(Action::AccessDashboard))
            .route(Click, Id("addCompetitorBtn"), |_| Some(Action::ShowModal))
            .route(Click, Id("closeModal"), |_| Some(Action::HideModal))
            .route(Click, Id("cancelModal"), |_| Some(Action::HideModal))
            .route(Click, Class(&["filter-btn"]), |t| {
                t.data_attr("filter").map(|f| Action::Filter(f.to_string()))
            })
            // Backdrop click: the target is the modal itself, not its content
            .route(Click, Id(MODAL_ID), |_| Some(Action::HideModal))
            .route(Click, AnchorLink, |t| {
                t.href
                    .as_deref()
                    .map(|h| Action::ScrollTo(h.trim_start_matches('#').to_string()))
            })
            .route(Submit, Id("addCompetitorForm"), |_| {
                Some(Action::Submit(FormId::AddCompetitor))
            })
            .route(Submit, Id("contactForm"), |_| Some(Action::Submit(FormId::Contact)))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Actions for an event, in table order
    pub fn classify(&self, event: &Event) -> Vec<Action> {
        self.routes
            .iter()
            .filter(|r| r.kind == event.kind && r.matcher.matches(&event.target))
            .filter_map(|r| (r.handler)(&event.target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(event: Event) -> Vec<Action> {
        EventRouter::standard().classify(&event)
    }

    #[test]
    fn test_nav_and_sidebar_links() {
        let nav = Target::new().class("nav-link").data("section", "reports");
        assert_eq!(
            classify(Event::click(nav)),
            vec![Action::Navigate("reports".to_string())]
        );

        let sidebar = Target::new().class("sidebar-link").data("section", "alerts");
        assert_eq!(
            classify(Event::click(sidebar)),
            vec![Action::Navigate("alerts".to_string())]
        );
    }

    #[test]
    fn test_link_without_section_does_nothing() {
        assert!(classify(Event::click(Target::new().class("nav-link"))).is_empty());
    }

    #[test]
    fn test_fixed_ids() {
        assert_eq!(
            classify(Event::click(Target::with_id("accessDashboard"))),
            vec![Action::AccessDashboard]
        );
        assert_eq!(
            classify(Event::click(Target::with_id("addCompetitorBtn"))),
            vec![Action::ShowModal]
        );
        for id in ["closeModal", "cancelModal", MODAL_ID] {
            assert_eq!(classify(Event::click(Target::with_id(id))), vec![Action::HideModal]);
        }
    }

    #[test]
    fn test_filter_buttons() {
        let target = Target::new().class("filter-btn").data("filter", "MEDIUM");
        assert_eq!(
            classify(Event::click(target)),
            vec![Action::Filter("MEDIUM".to_string())]
        );
    }

    #[test]
    fn test_anchor_links() {
        let target = Target::new().href("#pricing");
        assert_eq!(
            classify(Event::click(target)),
            vec![Action::ScrollTo("pricing".to_string())]
        );
        assert!(classify(Event::click(Target::new().href("#"))).is_empty());
        assert!(classify(Event::click(Target::new().href("https://example.com"))).is_empty());
    }

    #[test]
    fn test_nav_link_with_anchor_href_fires_both() {
        let target = Target::new()
            .class("nav-link")
            .data("section", "landing")
            .href("#features");
        assert_eq!(
            classify(Event::click(target)),
            vec![
                Action::Navigate("landing".to_string()),
                Action::ScrollTo("features".to_string())
            ]
        );
    }

    #[test]
    fn test_submit_routes_ignore_clicks() {
        assert_eq!(
            classify(Event::submit(Target::with_id("addCompetitorForm"))),
            vec![Action::Submit(FormId::AddCompetitor)]
        );
        assert_eq!(
            classify(Event::submit(Target::with_id("contactForm"))),
            vec![Action::Submit(FormId::Contact)]
        );
        assert!(classify(Event::click(Target::with_id("contactForm"))).is_empty());
        assert!(classify(Event::submit(Target::with_id("accessDashboard"))).is_empty());
    }

    #[test]
    fn test_custom_table() {
        let router = EventRouter::new().route(
            EventKind::Click,
            TargetMatcher::Id("logo"),
            |_| Some(Action::Navigate("landing".to_string())),
        );
        assert_eq!(router.len(), 1);
        assert_eq!(
            router.classify(&Event::click(Target::with_id("logo"))),
            vec![Action::Navigate("landing".to_string())]
        );
        assert!(router
            .classify(&Event::click(Target::with_id("addCompetitorBtn")))
            .is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{"kind": "click", "target": {"classes": ["filter-btn"], "attributes": {"data-filter": "all"}}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(classify(event), vec![Action::Filter("all".to_string())]);

        let action = serde_json::to_value(Action::Navigate("alerts".to_string())).unwrap();
        assert_eq!(action["action"], "navigate");
        assert_eq!(action["value"], "alerts");
    }
}
