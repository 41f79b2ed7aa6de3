//! Core record types for the Black Fang data store
//!
//! This module defines the immutable records the dashboard renders:
//! - `Competitor`: A monitored business and its recent moves
//! - `Alert`: A detected competitor event with a severity
//! - `Report`: A periodic intelligence summary
//! - `UserProfile` and `PricingPlan`: Account and marketing data
//! - `Severity` and `AlertCategory`: Classification enums
//!
//! Field names follow the snake_case JSON layout the sample data is authored in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Categorical severity, used for competitor threat levels and alert severities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Threat level of a competitor record (drives visual emphasis only)
pub type ThreatLevel = Severity;

impl Severity {
    /// Get all severities, lowest first
    pub fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High]
    }

    /// Wire token, also used as CSS class and filter token
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            other => Err(UnknownSeverity(other.to_string())),
        }
    }
}

/// Returned when a string is not an exact severity token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

/// Kind of competitor event an alert reports
///
/// Tokens outside the known set are kept verbatim, so they render and save
/// back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum AlertCategory {
    PriceDrop,
    PriceIncrease,
    NegativeReviews,
    NewPromotion,
    WebsiteChange,
    Other(String),
}

impl AlertCategory {
    /// Wire token (e.g. `PRICE_DROP`)
    pub fn as_str(&self) -> &str {
        match self {
            AlertCategory::PriceDrop => "PRICE_DROP",
            AlertCategory::PriceIncrease => "PRICE_INCREASE",
            AlertCategory::NegativeReviews => "NEGATIVE_REVIEWS",
            AlertCategory::NewPromotion => "NEW_PROMOTION",
            AlertCategory::WebsiteChange => "WEBSITE_CHANGE",
            AlertCategory::Other(token) => token,
        }
    }

    /// Display label: the first underscore becomes a space
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl From<String> for AlertCategory {
    fn from(token: String) -> Self {
        match token.as_str() {
            "PRICE_DROP" => AlertCategory::PriceDrop,
            "PRICE_INCREASE" => AlertCategory::PriceIncrease,
            "NEGATIVE_REVIEWS" => AlertCategory::NegativeReviews,
            "NEW_PROMOTION" => AlertCategory::NewPromotion,
            "WEBSITE_CHANGE" => AlertCategory::WebsiteChange,
            _ => AlertCategory::Other(token),
        }
    }
}

impl From<AlertCategory> for String {
    fn from(category: AlertCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The thing whose price changed: a product model or a service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PricedItem {
    Model(String),
    Service(String),
}

impl PricedItem {
    pub fn label(&self) -> &str {
        match self {
            PricedItem::Model(name) | PricedItem::Service(name) => name,
        }
    }
}

/// A single observed price change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceChange {
    /// Either `"model": ...` or `"service": ...` in the source document
    #[serde(flatten)]
    pub item: PricedItem,
    pub old_price: String,
    pub new_price: String,
    /// Percentage delta as displayed (e.g. "-6%")
    pub change: String,
}

/// A monitored competitor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub website: String,
    pub threat_level: ThreatLevel,
    /// ISO 8601 timestamp, parsed only when formatted
    pub last_activity: String,
    pub changes_detected: u32,
    #[serde(default)]
    pub price_changes: Vec<PriceChange>,
    #[serde(default)]
    pub recent_reviews: u32,
    #[serde(default)]
    pub negative_reviews: u32,
    #[serde(default)]
    pub promotions: Vec<String>,
}

/// A detected competitor event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    /// Competitor name, by value
    pub competitor: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// A periodic intelligence report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: u32,
    pub title: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub competitors_monitored: u32,
    pub total_changes: u32,
    pub high_threats: u32,
    #[serde(default)]
    pub key_insights: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

/// The signed-in account (singleton)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub company: String,
    pub email: String,
    pub subscription: String,
    pub monthly_fee: String,
    pub competitors_tracked: u32,
    pub alerts_enabled: bool,
    pub report_frequency: String,
}

/// A plan shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

/// An entry on the dashboard activity timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub message: String,
    pub time: String,
}

/// One series of the threat trend chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    pub label: String,
    pub color: String,
    pub data: Vec<u32>,
}

/// Threat counts over the last few days, one series per severity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreatTrend {
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tokens() {
        for severity in Severity::all() {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(*severity));
        }
        assert!("high".parse::<Severity>().is_err());
        assert!("all".parse::<Severity>().is_err());
    }

    #[test]
    fn test_category_label_replaces_first_underscore() {
        assert_eq!(AlertCategory::PriceDrop.label(), "PRICE DROP");
        assert_eq!(AlertCategory::NegativeReviews.label(), "NEGATIVE REVIEWS");
    }

    #[test]
    fn test_unknown_category_keeps_its_token() {
        let category: AlertCategory = serde_json::from_str("\"MARKET_EXIT\"").unwrap();
        assert_eq!(category, AlertCategory::Other("MARKET_EXIT".to_string()));
        assert_eq!(category.label(), "MARKET EXIT");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"MARKET_EXIT\"");

        let known: AlertCategory = serde_json::from_str("\"NEW_PROMOTION\"").unwrap();
        assert_eq!(known, AlertCategory::NewPromotion);
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"NEW_PROMOTION\"");
    }

    #[test]
    fn test_price_change_item_key() {
        let json = r#"{"service": "Teeth Cleaning", "old_price": "3000", "new_price": "2500", "change": "-16.7%"}"#;
        let change: PriceChange = serde_json::from_str(json).unwrap();
        assert_eq!(change.item, PricedItem::Service("Teeth Cleaning".to_string()));
        assert_eq!(change.item.label(), "Teeth Cleaning");
    }
}
