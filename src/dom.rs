//! Document Model
//!
//! An in-memory stand-in for the page's element tree. It holds exactly the
//! elements the controller reads and toggles: section containers, navigation
//! links, the sidebar, render containers, alert filter controls, the modal, the
//! two forms and the chart canvas.
//!
//! Any element may be absent. Operations on a missing element are skipped, which
//! is the only error tolerance the dashboard has.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::controller::state::{Section, FILTER_ALL};
use crate::data::Severity;
use crate::render::chart::ChartConfig;

/// Element id of the add-competitor modal
pub const MODAL_ID: &str = "addCompetitorModal";

/// Element id of the threat chart canvas
pub const CANVAS_ID: &str = "threatChart";

/// Attribute carrying a card's severity, mirrored from the filter controls
pub const SEVERITY_ATTR: &str = "data-severity";

/// Containers filled by renderers, keyed by element id
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerId {
    PricingGrid,
    DashboardAlerts,
    CompetitorOverview,
    ActivityTimeline,
    CompetitorsGrid,
    ReportsList,
    AlertsList,
    ProfileInfo,
    SubscriptionInfo,
}

impl ContainerId {
    pub fn all() -> &'static [ContainerId] {
        &[
            ContainerId::PricingGrid,
            ContainerId::DashboardAlerts,
            ContainerId::CompetitorOverview,
            ContainerId::ActivityTimeline,
            ContainerId::CompetitorsGrid,
            ContainerId::ReportsList,
            ContainerId::AlertsList,
            ContainerId::ProfileInfo,
            ContainerId::SubscriptionInfo,
        ]
    }

    /// Element id in the page
    pub fn dom_id(&self) -> &'static str {
        match self {
            ContainerId::PricingGrid => "pricingGrid",
            ContainerId::DashboardAlerts => "dashboardAlerts",
            ContainerId::CompetitorOverview => "competitorOverview",
            ContainerId::ActivityTimeline => "activityTimeline",
            ContainerId::CompetitorsGrid => "competitorsGrid",
            ContainerId::ReportsList => "reportsList",
            ContainerId::AlertsList => "alertsList",
            ContainerId::ProfileInfo => "profileInfo",
            ContainerId::SubscriptionInfo => "subscriptionInfo",
        }
    }

    /// Section the container lives in
    pub fn section(&self) -> Section {
        match self {
            ContainerId::PricingGrid => Section::Landing,
            ContainerId::DashboardAlerts
            | ContainerId::CompetitorOverview
            | ContainerId::ActivityTimeline => Section::Dashboard,
            ContainerId::CompetitorsGrid => Section::Competitors,
            ContainerId::ReportsList => Section::Reports,
            ContainerId::AlertsList => Section::Alerts,
            ContainerId::ProfileInfo | ContainerId::SubscriptionInfo => Section::Settings,
        }
    }

    /// Containers of a section, in page order
    pub fn for_section(section: Section) -> Vec<ContainerId> {
        Self::all()
            .iter()
            .copied()
            .filter(|c| c.section() == section)
            .collect()
    }
}

/// A card produced by a renderer that later handlers can show or hide
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedItem {
    pub attributes: BTreeMap<String, String>,
    pub visible: bool,
}

impl RenderedItem {
    pub fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            visible: true,
        }
    }

    /// Builder method: set an attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl Default for RenderedItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderer output for one container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub items: Vec<RenderedItem>,
}

impl Fragment {
    pub fn html(html: String) -> Self {
        Self {
            html,
            items: Vec::new(),
        }
    }
}

/// A render container and what was last put into it
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Container {
    pub html: String,
    pub items: Vec<RenderedItem>,
    /// How many times the container has been replaced
    pub render_count: u32,
}

/// Where a navigation link lives
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Nav,
    Sidebar,
}

impl LinkKind {
    /// CSS class identifying the link
    pub fn class(&self) -> &'static str {
        match self {
            LinkKind::Nav => "nav-link",
            LinkKind::Sidebar => "sidebar-link",
        }
    }
}

/// A navigation link carrying a `data-section` attribute
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub kind: LinkKind,
    pub section: String,
    pub label: String,
    pub active: bool,
}

/// An alert filter button carrying a `data-filter` attribute
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterControl {
    pub token: String,
    pub label: String,
    pub active: bool,
}

/// The two forms on the page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormId {
    AddCompetitor,
    Contact,
}

impl FormId {
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormId::AddCompetitor => "addCompetitorForm",
            FormId::Contact => "contactForm",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<FormId> {
        match id {
            "addCompetitorForm" => Some(FormId::AddCompetitor),
            "contactForm" => Some(FormId::Contact),
            _ => None,
        }
    }
}

/// A form input
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub required: bool,
    pub value: String,
}

impl FormField {
    fn new(name: &str, label: &str, input_type: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type: input_type.to_string(),
            required,
            value: String::new(),
        }
    }
}

/// A form and its current field values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    /// Set a field's value; returns false if the field does not exist
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Restore every field to its empty default
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn is_clear(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }
}

/// The chart canvas; at most one chart is ever attached
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Canvas {
    pub chart: Option<ChartConfig>,
    pub instances_created: u32,
}

/// The page's element tree, reduced to what the controller touches
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Document {
    /// Section containers and whether each carries the `active` marker
    pub sections: BTreeMap<Section, bool>,
    pub links: Vec<NavLink>,
    /// `Some(hidden)` when the sidebar exists
    pub sidebar_hidden: Option<bool>,
    /// `Some(with_sidebar)` when the main content wrapper exists
    pub main_with_sidebar: Option<bool>,
    pub containers: BTreeMap<ContainerId, Container>,
    pub filter_controls: Vec<FilterControl>,
    /// `Some(hidden)` when the modal exists
    pub modal_hidden: Option<bool>,
    pub forms: BTreeMap<FormId, Form>,
    pub canvas: Option<Canvas>,
    /// Other element ids that anchor links may scroll to
    pub anchors: BTreeSet<String>,
    /// Last acknowledgment message shown to the user
    pub notice: Option<String>,
    /// Element id of the last requested scroll
    pub scroll_target: Option<String>,
}

impl Document {
    /// A document with no elements at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full dashboard page, as first loaded
    pub fn standard() -> Self {
        let mut doc = Self::empty();

        for section in Section::all() {
            doc = doc.with_section(*section);
        }

        for section in [
            Section::Landing,
            Section::Dashboard,
            Section::Competitors,
            Section::Reports,
            Section::Alerts,
        ] {
            doc = doc.with_link(LinkKind::Nav, section);
        }
        for section in Section::all().iter().filter(|s| s.is_gated()) {
            doc = doc.with_link(LinkKind::Sidebar, *section);
        }

        for container in ContainerId::all() {
            doc = doc.with_container(*container);
        }

        doc.sidebar_hidden = Some(true);
        doc.main_with_sidebar = Some(false);
        doc.modal_hidden = Some(true);
        doc.canvas = Some(Canvas::default());

        doc.filter_controls.push(FilterControl {
            token: FILTER_ALL.to_string(),
            label: "All".to_string(),
            active: true,
        });
        for severity in Severity::all().iter().rev() {
            doc.filter_controls.push(FilterControl {
                token: severity.as_str().to_string(),
                label: title_case(severity.as_str()),
                active: false,
            });
        }

        doc.forms.insert(
            FormId::AddCompetitor,
            Form {
                fields: vec![
                    FormField::new("competitorName", "Competitor Name", "text", true),
                    FormField::new("competitorWebsite", "Website URL", "url", true),
                    FormField::new("competitorIndustry", "Industry", "text", false),
                ],
            },
        );
        doc.forms.insert(
            FormId::Contact,
            Form {
                fields: vec![
                    FormField::new("contactName", "Name", "text", true),
                    FormField::new("contactEmail", "Email", "email", true),
                    FormField::new("contactCompany", "Company", "text", false),
                    FormField::new("contactMessage", "Message", "textarea", true),
                ],
            },
        );

        for anchor in ["features", "pricing", "contact"] {
            doc.anchors.insert(anchor.to_string());
        }

        doc
    }

    /// Builder method: add a section container
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.insert(section, false);
        self
    }

    /// Builder method: add a navigation link
    pub fn with_link(mut self, kind: LinkKind, section: Section) -> Self {
        self.links.push(NavLink {
            kind,
            section: section.id().to_string(),
            label: section.title().to_string(),
            active: false,
        });
        self
    }

    /// Builder method: add an empty render container
    pub fn with_container(mut self, container: ContainerId) -> Self {
        self.containers.insert(container, Container::default());
        self
    }

    /// Sections currently carrying the `active` marker
    pub fn active_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|(_, active)| **active)
            .map(|(section, _)| *section)
            .collect()
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Replace a container's content wholesale; false if it does not exist
    pub fn replace(&mut self, id: ContainerId, fragment: Fragment) -> bool {
        match self.containers.get_mut(&id) {
            Some(container) => {
                container.html = fragment.html;
                container.items = fragment.items;
                container.render_count += 1;
                true
            }
            None => false,
        }
    }

    /// Alert cards currently rendered in the alerts list
    pub fn alert_cards(&self) -> &[RenderedItem] {
        self.containers
            .get(&ContainerId::AlertsList)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn form(&self, id: FormId) -> Option<&Form> {
        self.forms.get(&id)
    }

    pub fn form_mut(&mut self, id: FormId) -> Option<&mut Form> {
        self.forms.get_mut(&id)
    }

    /// Whether an element with this id exists anywhere in the document
    pub fn element_exists(&self, id: &str) -> bool {
        self.sections.keys().any(|s| s.id() == id)
            || self.containers.keys().any(|c| c.dom_id() == id)
            || self.forms.keys().any(|f| f.dom_id() == id)
            || (id == MODAL_ID && self.modal_hidden.is_some())
            || (id == CANVAS_ID && self.canvas.is_some())
            || self.anchors.contains(id)
    }
}

fn title_case(token: &str) -> String {
    let lower = token.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_document_shape() {
        let doc = Document::standard();
        assert_eq!(doc.sections.len(), 6);
        assert!(doc.active_sections().is_empty());
        assert_eq!(doc.containers.len(), ContainerId::all().len());
        assert_eq!(doc.sidebar_hidden, Some(true));
        assert_eq!(doc.modal_hidden, Some(true));

        let tokens: Vec<&str> = doc.filter_controls.iter().map(|f| f.token.as_str()).collect();
        assert_eq!(tokens, vec!["all", "HIGH", "MEDIUM", "LOW"]);
        assert_eq!(doc.filter_controls[1].label, "High");
    }

    #[test]
    fn test_replace_missing_container() {
        let mut doc = Document::empty();
        assert!(!doc.replace(ContainerId::AlertsList, Fragment::html("x".to_string())));
        assert!(doc.alert_cards().is_empty());
    }

    #[test]
    fn test_replace_counts_renders() {
        let mut doc = Document::empty().with_container(ContainerId::ReportsList);
        doc.replace(ContainerId::ReportsList, Fragment::html("a".to_string()));
        doc.replace(ContainerId::ReportsList, Fragment::html("b".to_string()));

        let container = doc.container(ContainerId::ReportsList).unwrap();
        assert_eq!(container.html, "b");
        assert_eq!(container.render_count, 2);
    }

    #[test]
    fn test_form_reset() {
        let mut doc = Document::standard();
        let form = doc.form_mut(FormId::Contact).unwrap();
        assert!(form.set("contactName", "Asha"));
        assert!(!form.set("nope", "x"));
        assert_eq!(form.value("contactName"), Some("Asha"));

        form.reset();
        assert!(form.is_clear());
    }

    #[test]
    fn test_container_sections() {
        assert_eq!(
            ContainerId::for_section(Section::Dashboard),
            vec![
                ContainerId::DashboardAlerts,
                ContainerId::CompetitorOverview,
                ContainerId::ActivityTimeline
            ]
        );
        assert!(ContainerId::for_section(Section::Settings).contains(&ContainerId::ProfileInfo));
    }

    #[test]
    fn test_element_exists() {
        let doc = Document::standard();
        assert!(doc.element_exists("pricing"));
        assert!(doc.element_exists("alertsList"));
        assert!(doc.element_exists(MODAL_ID));
        assert!(!doc.element_exists("nowhere"));
    }
}
