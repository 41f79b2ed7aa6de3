//! Built-in sample dataset
//!
//! The demo ships with three competitors across different industries so every
//! renderer has something to show, including empty sub-blocks.

use super::store::DataStore;
use super::types::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn price_change(item: PricedItem, old_price: &str, new_price: &str, change: &str) -> PriceChange {
    PriceChange {
        item,
        old_price: old_price.to_string(),
        new_price: new_price.to_string(),
        change: change.to_string(),
    }
}

fn competitors() -> Vec<Competitor> {
    vec![
        Competitor {
            id: 1,
            name: "AutoMax Dealers".to_string(),
            industry: "Automotive".to_string(),
            website: "https://automax-dealers.com".to_string(),
            threat_level: Severity::High,
            last_activity: "2025-08-17T10:30:00Z".to_string(),
            changes_detected: 5,
            price_changes: vec![
                price_change(
                    PricedItem::Model("Honda City".to_string()),
                    "₹12,50,000",
                    "₹11,75,000",
                    "-6%",
                ),
                price_change(
                    PricedItem::Model("Maruti Swift".to_string()),
                    "₹7,80,000",
                    "₹7,50,000",
                    "-3.8%",
                ),
            ],
            recent_reviews: 3,
            negative_reviews: 2,
            promotions: strings(&["Diwali Special - 10% off", "Free Insurance"]),
        },
        Competitor {
            id: 2,
            name: "SmileCare Dental".to_string(),
            industry: "Healthcare".to_string(),
            website: "https://smilecare-dental.com".to_string(),
            threat_level: Severity::Medium,
            last_activity: "2025-08-16T15:45:00Z".to_string(),
            changes_detected: 2,
            price_changes: vec![price_change(
                PricedItem::Service("Teeth Cleaning".to_string()),
                "₹3,000",
                "₹2,500",
                "-16.7%",
            )],
            recent_reviews: 8,
            negative_reviews: 1,
            promotions: strings(&["New Patient Special"]),
        },
        Competitor {
            id: 3,
            name: "FitZone Gym".to_string(),
            industry: "Fitness".to_string(),
            website: "https://fitzone-gym.com".to_string(),
            threat_level: Severity::Low,
            last_activity: "2025-08-15T09:20:00Z".to_string(),
            changes_detected: 1,
            price_changes: Vec::new(),
            recent_reviews: 5,
            negative_reviews: 0,
            promotions: strings(&["Summer Membership - 3 months free"]),
        },
    ]
}

fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            category: AlertCategory::PriceDrop,
            competitor: "AutoMax Dealers".to_string(),
            severity: Severity::High,
            message: "Price dropped 6% on Honda City - ₹75,000 reduction".to_string(),
            timestamp: "2025-08-17T10:30:00Z".to_string(),
            read: false,
            recommendation: Some(
                "Consider price matching or highlighting superior service value".to_string(),
            ),
        },
        Alert {
            id: 2,
            category: AlertCategory::NegativeReviews,
            competitor: "AutoMax Dealers".to_string(),
            severity: Severity::Medium,
            message: "2 negative reviews about delivery delays in past 24h".to_string(),
            timestamp: "2025-08-17T08:15:00Z".to_string(),
            read: false,
            recommendation: Some("Target 'fast delivery' in your marketing campaigns".to_string()),
        },
        Alert {
            id: 3,
            category: AlertCategory::NewPromotion,
            competitor: "SmileCare Dental".to_string(),
            severity: Severity::Medium,
            message: "Launched 'New Patient Special' discount program".to_string(),
            timestamp: "2025-08-16T15:45:00Z".to_string(),
            read: true,
            recommendation: Some(
                "Launch counter-promotional campaign for new patients".to_string(),
            ),
        },
    ]
}

fn reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            title: "Weekly Intelligence Report - Aug 12-17, 2025".to_string(),
            date: "2025-08-17".to_string(),
            competitors_monitored: 3,
            total_changes: 8,
            high_threats: 1,
            key_insights: Some(strings(&[
                "AutoMax Dealers aggressive pricing strategy - 3 price drops this week",
                "SmileCare expanding patient acquisition with discount programs",
                "FitZone maintaining premium positioning with minimal changes",
            ])),
            recommendations: Some(strings(&[
                "Immediate price review for Honda City model",
                "Launch 'Superior Service' campaign to differentiate from AutoMax",
                "Monitor SmileCare's discount effectiveness for potential response",
            ])),
        },
        Report {
            id: 2,
            title: "Weekly Intelligence Report - Aug 5-11, 2025".to_string(),
            date: "2025-08-11".to_string(),
            competitors_monitored: 3,
            total_changes: 4,
            high_threats: 0,
            key_insights: Some(strings(&[
                "Market stability across all competitors",
                "Standard promotional activities for seasonal sales",
                "No significant pricing or service changes detected",
            ])),
            recommendations: None,
        },
    ]
}

fn user_profile() -> UserProfile {
    UserProfile {
        name: "Vedant Patel".to_string(),
        company: "Demo Automotive Dealership".to_string(),
        email: "vedant@example.com".to_string(),
        subscription: "Premium Plan".to_string(),
        monthly_fee: "₹65,000".to_string(),
        competitors_tracked: 3,
        alerts_enabled: true,
        report_frequency: "Weekly".to_string(),
    }
}

fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Basic Intelligence".to_string(),
            price: "₹25,000".to_string(),
            features: strings(&[
                "Up to 3 competitors",
                "Weekly reports",
                "Basic alerts",
                "Email support",
            ]),
            popular: false,
        },
        PricingPlan {
            name: "Professional".to_string(),
            price: "₹45,000".to_string(),
            features: strings(&[
                "Up to 7 competitors",
                "Real-time alerts",
                "Advanced analytics",
                "Phone support",
                "Custom reports",
            ]),
            popular: true,
        },
        PricingPlan {
            name: "Enterprise".to_string(),
            price: "₹75,000".to_string(),
            features: strings(&[
                "Unlimited competitors",
                "Priority alerts",
                "Strategic consultation",
                "Dedicated support",
                "API access",
            ]),
            popular: false,
        },
    ]
}

fn activity() -> Vec<ActivityEvent> {
    let event = |message: &str, time: &str| ActivityEvent {
        message: message.to_string(),
        time: time.to_string(),
    };

    vec![
        event(
            "AutoMax Dealers reduced Honda City price by 6%",
            "2025-08-17T10:30:00Z",
        ),
        event(
            "SmileCare Dental launched new patient promotion",
            "2025-08-16T15:45:00Z",
        ),
        event(
            "AutoMax Dealers received negative reviews",
            "2025-08-17T08:15:00Z",
        ),
        event(
            "FitZone Gym updated membership packages",
            "2025-08-15T09:20:00Z",
        ),
    ]
}

/// The five-day threat trend plotted on the dashboard
pub fn threat_trend() -> ThreatTrend {
    let series = |label: &str, color: &str, data: [u32; 5]| TrendSeries {
        label: label.to_string(),
        color: color.to_string(),
        data: data.to_vec(),
    };

    ThreatTrend {
        labels: strings(&["Aug 13", "Aug 14", "Aug 15", "Aug 16", "Aug 17"]),
        series: vec![
            series("High Threats", "#dc2626", [0, 0, 0, 1, 1]),
            series("Medium Threats", "#f59e0b", [1, 1, 2, 2, 2]),
            series("Low Threats", "#10b981", [1, 1, 1, 1, 1]),
        ],
    }
}

/// Build the complete sample store
pub fn sample_store() -> DataStore {
    DataStore {
        competitors: competitors(),
        alerts: alerts(),
        reports: reports(),
        user_profile: user_profile(),
        pricing_plans: pricing_plans(),
        activity: activity(),
        threat_trend: threat_trend(),
    }
}
