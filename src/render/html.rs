//! HTML fragments for each render container.
//!
//! Plain string building over the view-models in [`super::model`]. Every
//! interpolated value goes through [`escape`].

use std::fmt::Write;

use super::model::*;
use crate::dom::{ContainerId, Fragment, RenderedItem, SEVERITY_ATTR};

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Build the fragment for one container
pub fn render_container(id: ContainerId, ctx: &RenderContext<'_>) -> Fragment {
    match id {
        ContainerId::PricingGrid => Fragment::html(pricing_grid(&pricing_cards(ctx))),
        ContainerId::DashboardAlerts => Fragment::html(dashboard_alerts_html(&dashboard_alerts(ctx))),
        ContainerId::CompetitorOverview => {
            Fragment::html(competitor_overview_html(&competitor_overview(ctx)))
        }
        ContainerId::ActivityTimeline => Fragment::html(activity_timeline_html(&activity_timeline(ctx))),
        ContainerId::CompetitorsGrid => Fragment::html(competitors_grid(&competitor_cards(ctx))),
        ContainerId::ReportsList => Fragment::html(reports_list(&report_cards(ctx))),
        ContainerId::AlertsList => alerts_list(&alert_cards(ctx)),
        ContainerId::ProfileInfo => Fragment::html(profile_info(&profile_fields(ctx))),
        ContainerId::SubscriptionInfo => Fragment::html(subscription_info(&subscription(ctx))),
    }
}

pub fn pricing_grid(plans: &[PricingCardView]) -> String {
    let mut html = String::new();
    for plan in plans {
        let popular = if plan.popular { " popular" } else { "" };
        let _ = write!(
            html,
            r#"<div class="pricing-card{popular}">
    <div class="pricing-name">{name}</div>
    <div class="pricing-price">{price}</div>
    <div class="pricing-period">per month</div>
    <ul class="pricing-features">{features}</ul>
    <button class="btn btn--primary btn--full-width">Choose Plan</button>
</div>
"#,
            name = escape(&plan.name),
            price = escape(&plan.price),
            features = list_items(&plan.features),
        );
    }
    html
}

fn recommendation(rec: &Option<String>) -> String {
    rec.as_deref()
        .map(|r| format!(r#"<div class="alert-recommendation">{}</div>"#, escape(r)))
        .unwrap_or_default()
}

pub fn dashboard_alerts_html(alerts: &[AlertItemView]) -> String {
    let mut html = String::new();
    for alert in alerts {
        let _ = write!(
            html,
            r#"<div class="alert-item">
    <div class="alert-severity {severity}"></div>
    <div class="alert-content">
        <div class="alert-message">{message}</div>
        <div class="alert-time">{age}</div>
        {recommendation}
    </div>
</div>
"#,
            severity = alert.severity,
            message = escape(&alert.message),
            age = escape(&alert.age),
            recommendation = recommendation(&alert.recommendation),
        );
    }
    html
}

pub fn competitor_overview_html(competitors: &[CompetitorSummaryView]) -> String {
    let mut html = String::new();
    for c in competitors {
        let _ = write!(
            html,
            r#"<div class="competitor-item">
    <div class="competitor-info">
        <div class="competitor-name">{name}</div>
        <div class="competitor-industry">{industry}</div>
    </div>
    <div class="threat-level {level}">{level}</div>
</div>
"#,
            name = escape(&c.name),
            industry = escape(&c.industry),
            level = c.threat_level,
        );
    }
    html
}

pub fn activity_timeline_html(activity: &[ActivityItemView]) -> String {
    let mut html = String::new();
    for item in activity {
        let _ = write!(
            html,
            r#"<div class="alert-item">
    <div class="alert-content">
        <div class="alert-message">{message}</div>
        <div class="alert-time">{age}</div>
    </div>
</div>
"#,
            message = escape(&item.message),
            age = escape(&item.age),
        );
    }
    html
}

pub fn competitors_grid(cards: &[CompetitorCardView]) -> String {
    let mut html = String::new();
    for c in cards {
        let price_changes = if c.price_changes.is_empty() {
            String::new()
        } else {
            let rows: String = c
                .price_changes
                .iter()
                .map(|p| {
                    format!(
                        r#"<div class="price-change"><span>{}</span><span class="price-change-negative">{}</span></div>"#,
                        escape(&p.label),
                        escape(&p.change)
                    )
                })
                .collect();
            format!(r#"<div class="price-changes"><h4>Recent Price Changes</h4>{}</div>"#, rows)
        };

        let promotions = if c.promotions.is_empty() {
            String::new()
        } else {
            let tags: String = c
                .promotions
                .iter()
                .map(|p| format!(r#"<span class="promotion-tag">{}</span>"#, escape(p)))
                .collect();
            format!(r#"<div class="promotions"><h4>Active Promotions</h4>{}</div>"#, tags)
        };

        let _ = write!(
            html,
            r#"<div class="competitor-card">
    <div class="competitor-header">
        <div class="competitor-details">
            <h3>{name}</h3>
            <div class="competitor-industry">{industry}</div>
            <a href="{website}" target="_blank" class="competitor-website">{website}</a>
        </div>
        <div class="threat-level {level}">{level}</div>
    </div>
    <div class="competitor-stats">
        <p><strong>Changes Detected:</strong> {changes}</p>
        <p><strong>Recent Reviews:</strong> {reviews} ({negative} negative)</p>
        <p><strong>Last Activity:</strong> {last_activity}</p>
    </div>
    {price_changes}
    {promotions}
</div>
"#,
            name = escape(&c.name),
            industry = escape(&c.industry),
            website = escape(&c.website),
            level = c.threat_level,
            changes = c.changes_detected,
            reviews = c.recent_reviews,
            negative = c.negative_reviews,
            last_activity = escape(&c.last_activity),
        );
    }
    html
}

pub fn reports_list(reports: &[ReportCardView]) -> String {
    let mut html = String::new();
    for r in reports {
        let insights = if r.insights.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="report-insights"><h4>Key Insights</h4><ul>{}</ul></div>"#,
                list_items(&r.insights)
            )
        };
        let recommendations = if r.recommendations.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="report-recommendations"><h4>Recommendations</h4><ul>{}</ul></div>"#,
                list_items(&r.recommendations)
            )
        };

        let _ = write!(
            html,
            r#"<div class="report-card">
    <div class="report-header">
        <div>
            <div class="report-title">{title}</div>
            <div class="report-date">{date}</div>
        </div>
        <button class="btn btn--outline">View Report</button>
    </div>
    <div class="report-stats">
        <div class="report-stat"><div class="report-stat-number">{monitored}</div><div class="report-stat-label">Competitors</div></div>
        <div class="report-stat"><div class="report-stat-number">{changes}</div><div class="report-stat-label">Changes</div></div>
        <div class="report-stat"><div class="report-stat-number">{threats}</div><div class="report-stat-label">High Threats</div></div>
    </div>
    {insights}
    {recommendations}
</div>
"#,
            title = escape(&r.title),
            date = escape(&r.date),
            monitored = r.competitors_monitored,
            changes = r.total_changes,
            threats = r.high_threats,
        );
    }
    html
}

/// Alert cards carry their severity so the filter can find them later
pub fn alerts_list(alerts: &[AlertCardView]) -> Fragment {
    let mut html = String::new();
    let mut items = Vec::with_capacity(alerts.len());

    for a in alerts {
        let _ = write!(
            html,
            r#"<div class="alert-card {severity}" data-severity="{severity}" data-alert-id="{id}">
    <div class="alert-card-header">
        <div>
            <div class="alert-type">{category}</div>
            <div class="alert-competitor">{competitor}</div>
        </div>
        <div class="threat-level {severity}">{severity}</div>
    </div>
    <div class="alert-message">{message}</div>
    <div class="alert-time">{age}</div>
    {recommendation}
</div>
"#,
            severity = a.severity,
            id = a.id,
            category = escape(&a.category),
            competitor = escape(&a.competitor),
            message = escape(&a.message),
            age = escape(&a.age),
            recommendation = recommendation(&a.recommendation),
        );
        items.push(
            RenderedItem::new()
                .attr(SEVERITY_ATTR, a.severity.as_str())
                .attr("data-alert-id", a.id.to_string()),
        );
    }

    Fragment { html, items }
}

fn profile_field(field: &LabeledValue) -> String {
    format!(
        r#"<div class="profile-field"><span class="profile-label">{}</span><span class="profile-value">{}</span></div>
"#,
        escape(&field.label),
        escape(&field.value)
    )
}

pub fn profile_info(fields: &[LabeledValue]) -> String {
    fields.iter().map(profile_field).collect()
}

pub fn subscription_info(view: &SubscriptionView) -> String {
    let fields: String = view.fields.iter().map(profile_field).collect();
    format!(
        r#"<div class="subscription-plan">
    <div class="subscription-plan-name">{name}</div>
    <div class="subscription-plan-price">{price}</div>
</div>
{fields}<button class="btn btn--primary btn--full-width">Upgrade Plan</button>
"#,
        name = escape(&view.plan_name),
        price = escape(&view.plan_price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use chrono::{TimeZone, Utc};

    fn ctx(store: &DataStore) -> RenderContext<'_> {
        RenderContext::new(store, Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Fast" & 'cheap'</b>"#),
            "&lt;b&gt;&quot;Fast&quot; &amp; &#39;cheap&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_pricing_grid_marks_popular() {
        let store = DataStore::sample();
        let html = render_container(ContainerId::PricingGrid, &ctx(&store)).html;
        assert_eq!(html.matches("pricing-card popular").count(), 1);
        assert_eq!(html.matches("<li>").count(), 14);
    }

    #[test]
    fn test_competitors_grid_omits_empty_price_changes() {
        let store = DataStore::sample();
        let html = render_container(ContainerId::CompetitorsGrid, &ctx(&store)).html;
        assert_eq!(html.matches("competitor-card").count(), 3);
        assert_eq!(html.matches("Recent Price Changes").count(), 2);
        assert_eq!(html.matches("Active Promotions").count(), 3);
    }

    #[test]
    fn test_reports_list_omits_missing_recommendations() {
        let store = DataStore::sample();
        let html = render_container(ContainerId::ReportsList, &ctx(&store)).html;
        assert_eq!(html.matches("Key Insights").count(), 2);
        assert_eq!(html.matches("<h4>Recommendations</h4>").count(), 1);
        assert!(html.contains("August 11, 2025"));
    }

    #[test]
    fn test_alerts_list_items_carry_severity() {
        let store = DataStore::sample();
        let fragment = render_container(ContainerId::AlertsList, &ctx(&store));
        let severities: Vec<&str> = fragment
            .items
            .iter()
            .filter_map(|item| item.get(SEVERITY_ATTR))
            .collect();
        assert_eq!(severities, vec!["HIGH", "MEDIUM", "MEDIUM"]);
        assert!(fragment.items.iter().all(|item| item.visible));
        assert!(fragment.html.contains(r#"data-severity="HIGH""#));
        assert!(fragment.html.contains("PRICE DROP"));
    }

    #[test]
    fn test_dashboard_alerts_escape_text() {
        let mut store = DataStore::sample();
        store.alerts[0].message = "<script>alert(1)</script>".to_string();
        let html = render_container(ContainerId::DashboardAlerts, &ctx(&store)).html;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_subscription_info() {
        let store = DataStore::sample();
        let html = render_container(ContainerId::SubscriptionInfo, &ctx(&store)).html;
        assert!(html.contains("Premium Plan"));
        assert!(html.contains("₹65,000/month"));
        assert!(html.contains("Upgrade Plan"));
    }
}
