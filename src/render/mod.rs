//! Rendering
//!
//! Turns the data store into container content in two steps:
//!
//! - **model**: pure view-model builders, one per container (testable data shaping)
//! - **html**: markup for each view-model, one fragment per container
//! - **chart**: the threat chart configuration and its render-once guard
//! - **page**: the full single-page document
//!
//! Every populate call replaces exactly one container. A missing container is
//! skipped silently.

pub mod chart;
pub mod html;
pub mod model;
pub mod page;

pub use chart::{create_threat_chart, ChartConfig};
pub use model::{section_view, RenderContext, SectionView, DASHBOARD_ALERT_LIMIT};

use crate::controller::state::Section;
use crate::dom::{ContainerId, Document};

/// Re-render one container; returns false if the document lacks it
pub fn populate(doc: &mut Document, id: ContainerId, ctx: &RenderContext<'_>) -> bool {
    if doc.container(id).is_none() {
        return false;
    }

    let fragment = html::render_container(id, ctx);
    doc.replace(id, fragment)
}

/// Re-render every container of a section, plus the chart for the dashboard
pub fn populate_section(doc: &mut Document, section: Section, ctx: &RenderContext<'_>) {
    for id in ContainerId::for_section(section) {
        populate(doc, id, ctx);
    }

    if section == Section::Dashboard {
        create_threat_chart(doc, &ctx.store.threat_trend);
    }
}

/// Fill every data container once, as done at startup
///
/// The chart is left for the first dashboard visit.
pub fn populate_all(doc: &mut Document, ctx: &RenderContext<'_>) {
    for id in ContainerId::all() {
        if *id != ContainerId::PricingGrid {
            populate(doc, *id, ctx);
        }
    }
}

/// Markup for all containers of a section, concatenated in page order
pub fn section_fragment(section: Section, ctx: &RenderContext<'_>) -> String {
    ContainerId::for_section(section)
        .into_iter()
        .map(|id| {
            format!(
                "<div id=\"{}\">{}</div>\n",
                id.dom_id(),
                html::render_container(id, ctx).html
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use chrono::Utc;

    #[test]
    fn test_populate_skips_missing_container() {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let mut doc = Document::empty().with_container(ContainerId::ReportsList);

        assert!(!populate(&mut doc, ContainerId::AlertsList, &ctx));
        assert!(populate(&mut doc, ContainerId::ReportsList, &ctx));
        assert!(doc.container(ContainerId::AlertsList).is_none());
    }

    #[test]
    fn test_populate_all_leaves_pricing_and_chart() {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let mut doc = Document::standard();

        populate_all(&mut doc, &ctx);

        assert_eq!(doc.container(ContainerId::PricingGrid).map(|c| c.render_count), Some(0));
        assert_eq!(doc.container(ContainerId::AlertsList).map(|c| c.render_count), Some(1));
        assert_eq!(doc.canvas.as_ref().map(|c| c.instances_created), Some(0));
    }

    #[test]
    fn test_section_fragment_wraps_containers() {
        let store = DataStore::sample();
        let ctx = RenderContext::new(&store, Utc::now());
        let html = section_fragment(Section::Settings, &ctx);

        assert!(html.contains(r#"<div id="profileInfo">"#));
        assert!(html.contains(r#"<div id="subscriptionInfo">"#));
    }
}
