//! Section View-Models
//!
//! Plain data shaped for each render container. Builders here are pure
//! functions of the data store and a fixed `now`; all data shaping (filtering,
//! truncation, date formatting) happens here so the HTML layer only prints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::controller::state::Section;
use crate::data::{DataStore, Severity, ThreatLevel};
use crate::format::{long_date, relative_age};
use crate::render::chart::ChartConfig;

/// Maximum number of unread alerts shown on the dashboard
pub const DASHBOARD_ALERT_LIMIT: usize = 3;

/// Everything a renderer reads
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a DataStore,
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(store: &'a DataStore, now: DateTime<Utc>) -> Self {
        Self { store, now }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricingCardView {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertItemView {
    pub severity: Severity,
    pub message: String,
    pub age: String,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompetitorSummaryView {
    pub name: String,
    pub industry: String,
    pub threat_level: ThreatLevel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityItemView {
    pub message: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceChangeView {
    pub label: String,
    pub change: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompetitorCardView {
    pub name: String,
    pub industry: String,
    pub website: String,
    pub threat_level: ThreatLevel,
    pub changes_detected: u32,
    pub recent_reviews: u32,
    pub negative_reviews: u32,
    pub last_activity: String,
    pub price_changes: Vec<PriceChangeView>,
    pub promotions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportCardView {
    pub title: String,
    pub date: String,
    pub competitors_monitored: u32,
    pub total_changes: u32,
    pub high_threats: u32,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertCardView {
    pub id: u32,
    pub category: String,
    pub competitor: String,
    pub severity: Severity,
    pub message: String,
    pub age: String,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubscriptionView {
    pub plan_name: String,
    pub plan_price: String,
    pub fields: Vec<LabeledValue>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub alerts: Vec<AlertItemView>,
    pub overview: Vec<CompetitorSummaryView>,
    pub activity: Vec<ActivityItemView>,
    pub chart: ChartConfig,
}

/// The view-model of a whole section
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView {
    Landing {
        plans: Vec<PricingCardView>,
    },
    Dashboard(DashboardView),
    Competitors {
        competitors: Vec<CompetitorCardView>,
    },
    Reports {
        reports: Vec<ReportCardView>,
    },
    Alerts {
        alerts: Vec<AlertCardView>,
    },
    Settings {
        profile: Vec<LabeledValue>,
        subscription: SubscriptionView,
    },
}

pub fn pricing_cards(ctx: &RenderContext<'_>) -> Vec<PricingCardView> {
    ctx.store
        .pricing_plans
        .iter()
        .map(|plan| PricingCardView {
            name: plan.name.clone(),
            price: plan.price.clone(),
            features: plan.features.clone(),
            popular: plan.popular,
        })
        .collect()
}

/// Unread alerts only, in stored order, at most `DASHBOARD_ALERT_LIMIT`
pub fn dashboard_alerts(ctx: &RenderContext<'_>) -> Vec<AlertItemView> {
    ctx.store
        .unread_alerts(DASHBOARD_ALERT_LIMIT)
        .map(|alert| AlertItemView {
            severity: alert.severity,
            message: alert.message.clone(),
            age: relative_age(&alert.timestamp, ctx.now),
            recommendation: alert.recommendation.clone(),
        })
        .collect()
}

pub fn competitor_overview(ctx: &RenderContext<'_>) -> Vec<CompetitorSummaryView> {
    ctx.store
        .competitors
        .iter()
        .map(|c| CompetitorSummaryView {
            name: c.name.clone(),
            industry: c.industry.clone(),
            threat_level: c.threat_level,
        })
        .collect()
}

pub fn activity_timeline(ctx: &RenderContext<'_>) -> Vec<ActivityItemView> {
    ctx.store
        .activity
        .iter()
        .map(|event| ActivityItemView {
            message: event.message.clone(),
            age: relative_age(&event.time, ctx.now),
        })
        .collect()
}

pub fn competitor_cards(ctx: &RenderContext<'_>) -> Vec<CompetitorCardView> {
    ctx.store
        .competitors
        .iter()
        .map(|c| CompetitorCardView {
            name: c.name.clone(),
            industry: c.industry.clone(),
            website: c.website.clone(),
            threat_level: c.threat_level,
            changes_detected: c.changes_detected,
            recent_reviews: c.recent_reviews,
            negative_reviews: c.negative_reviews,
            last_activity: relative_age(&c.last_activity, ctx.now),
            price_changes: c
                .price_changes
                .iter()
                .map(|p| PriceChangeView {
                    label: p.item.label().to_string(),
                    change: p.change.clone(),
                })
                .collect(),
            promotions: c.promotions.clone(),
        })
        .collect()
}

pub fn report_cards(ctx: &RenderContext<'_>) -> Vec<ReportCardView> {
    ctx.store
        .reports
        .iter()
        .map(|r| ReportCardView {
            title: r.title.clone(),
            date: long_date(&r.date),
            competitors_monitored: r.competitors_monitored,
            total_changes: r.total_changes,
            high_threats: r.high_threats,
            insights: r.key_insights.clone().unwrap_or_default(),
            recommendations: r.recommendations.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn alert_cards(ctx: &RenderContext<'_>) -> Vec<AlertCardView> {
    ctx.store
        .alerts
        .iter()
        .map(|a| AlertCardView {
            id: a.id,
            category: a.category.label(),
            competitor: a.competitor.clone(),
            severity: a.severity,
            message: a.message.clone(),
            age: relative_age(&a.timestamp, ctx.now),
            recommendation: a.recommendation.clone(),
        })
        .collect()
}

pub fn profile_fields(ctx: &RenderContext<'_>) -> Vec<LabeledValue> {
    let profile = &ctx.store.user_profile;
    vec![
        LabeledValue::new("Name", &profile.name),
        LabeledValue::new("Company", &profile.company),
        LabeledValue::new("Email", &profile.email),
        LabeledValue::new("Competitors Tracked", profile.competitors_tracked),
    ]
}

pub fn subscription(ctx: &RenderContext<'_>) -> SubscriptionView {
    let profile = &ctx.store.user_profile;
    SubscriptionView {
        plan_name: profile.subscription.clone(),
        plan_price: format!("{}/month", profile.monthly_fee),
        fields: vec![
            LabeledValue::new("Report Frequency", &profile.report_frequency),
            LabeledValue::new(
                "Alerts Enabled",
                if profile.alerts_enabled { "Yes" } else { "No" },
            ),
        ],
    }
}

/// Build the view-model of a section
pub fn section_view(section: Section, ctx: &RenderContext<'_>) -> SectionView {
    match section {
        Section::Landing => SectionView::Landing {
            plans: pricing_cards(ctx),
        },
        Section::Dashboard => SectionView::Dashboard(DashboardView {
            alerts: dashboard_alerts(ctx),
            overview: competitor_overview(ctx),
            activity: activity_timeline(ctx),
            chart: ChartConfig::threat_trend(&ctx.store.threat_trend),
        }),
        Section::Competitors => SectionView::Competitors {
            competitors: competitor_cards(ctx),
        },
        Section::Reports => SectionView::Reports {
            reports: report_cards(ctx),
        },
        Section::Alerts => SectionView::Alerts {
            alerts: alert_cards(ctx),
        },
        Section::Settings => SectionView::Settings {
            profile: profile_fields(ctx),
            subscription: subscription(ctx),
        },
    }
}
