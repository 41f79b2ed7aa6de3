//! View State
//!
//! The transient, session-wide state the navigation controller works on. It is
//! an explicit value passed in, never ambient module state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Filter token that matches every alert card
pub const FILTER_ALL: &str = "all";

/// A top-level view of the single-page dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Landing,
    Dashboard,
    Competitors,
    Reports,
    Alerts,
    Settings,
}

impl Section {
    /// Get all sections in page order
    pub fn all() -> &'static [Section] {
        &[
            Section::Landing,
            Section::Dashboard,
            Section::Competitors,
            Section::Reports,
            Section::Alerts,
            Section::Settings,
        ]
    }

    /// Element id of the section container (also the `data-section` value)
    pub fn id(&self) -> &'static str {
        match self {
            Section::Landing => "landing",
            Section::Dashboard => "dashboard",
            Section::Competitors => "competitors",
            Section::Reports => "reports",
            Section::Alerts => "alerts",
            Section::Settings => "settings",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Landing => "Home",
            Section::Dashboard => "Dashboard",
            Section::Competitors => "Competitors",
            Section::Reports => "Reports",
            Section::Alerts => "Alerts",
            Section::Settings => "Settings",
        }
    }

    /// Whether entering this section counts as being logged in
    pub fn is_gated(&self) -> bool {
        !matches!(self, Section::Landing)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Returned when a string names no section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

/// Session-wide view state
///
/// "Logged in" only means a gated section has been entered since the last visit
/// to the landing page. It is a navigation concept, not an authentication check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewState {
    pub current_section: Section,
    pub logged_in: bool,
    pub active_filter: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_section: Section::Landing,
            logged_in: false,
            active_filter: FILTER_ALL.to_string(),
        }
    }
}
