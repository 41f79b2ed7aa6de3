//! Threat Chart
//!
//! Builds the line-chart configuration handed to the page's charting library and
//! attaches it to the canvas at most once.

use serde::Serialize;

use crate::data::ThreatTrend;
use crate::dom::Document;

const LEGEND_COLOR: &str = "#ffffff";
const TICK_COLOR: &str = "#b0b0b0";
const GRID_COLOR: &str = "#404040";
const LINE_TENSION: f64 = 0.4;

/// Chart configuration, serialized in the charting library's own key layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u32>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
    pub fill: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: serde_json::Value,
    pub scales: serde_json::Value,
}

impl ChartConfig {
    /// Line chart of threat counts per severity
    pub fn threat_trend(trend: &ThreatTrend) -> Self {
        let datasets = trend
            .series
            .iter()
            .map(|series| ChartDataset {
                label: series.label.clone(),
                data: series.data.clone(),
                border_color: series.color.clone(),
                background_color: translucent(&series.color, 0.1),
                tension: LINE_TENSION,
                fill: true,
            })
            .collect();

        let axis = serde_json::json!({
            "ticks": { "color": TICK_COLOR },
            "grid": { "color": GRID_COLOR },
        });
        let mut y_axis = axis.clone();
        y_axis["beginAtZero"] = serde_json::Value::Bool(true);

        Self {
            kind: "line".to_string(),
            data: ChartData {
                labels: trend.labels.clone(),
                datasets,
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: serde_json::json!({
                    "legend": { "labels": { "color": LEGEND_COLOR } }
                }),
                scales: serde_json::json!({ "x": axis, "y": y_axis }),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// `#rrggbb` to `rgba(r, g, b, alpha)`; other inputs pass through unchanged
fn translucent(hex: &str, alpha: f64) -> String {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return hex.to_string();
    }

    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}

/// Attach the threat chart to the canvas unless one is already there
///
/// Returns true when a new chart instance was created.
pub fn create_threat_chart(doc: &mut Document, trend: &ThreatTrend) -> bool {
    let Some(canvas) = doc.canvas.as_mut() else {
        return false;
    };
    if canvas.chart.is_some() {
        return false;
    }

    canvas.chart = Some(ChartConfig::threat_trend(trend));
    canvas.instances_created += 1;
    tracing::debug!("Threat chart created");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::threat_trend;

    #[test]
    fn test_translucent() {
        assert_eq!(translucent("#dc2626", 0.1), "rgba(220, 38, 38, 0.1)");
        assert_eq!(translucent("red", 0.1), "red");
        assert_eq!(translucent("#aééb", 0.1), "#aééb");
        assert_eq!(translucent("#12345g", 0.1), "#12345g");
    }

    #[test]
    fn test_chart_with_non_ascii_colour() {
        let mut trend = threat_trend();
        trend.series[0].color = "#aééb".to_string();

        let config = ChartConfig::threat_trend(&trend);
        let json: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"], "#aééb");
    }

    #[test]
    fn test_chart_config_shape() {
        let config = ChartConfig::threat_trend(&threat_trend());
        assert_eq!(config.kind, "line");
        assert_eq!(config.data.labels.len(), 5);

        let colors: Vec<&str> = config
            .data
            .datasets
            .iter()
            .map(|d| d.border_color.as_str())
            .collect();
        assert_eq!(colors, vec!["#dc2626", "#f59e0b", "#10b981"]);

        let json: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#dc2626");
    }

    #[test]
    fn test_chart_created_once() {
        let mut doc = Document::standard();
        let trend = threat_trend();

        assert!(create_threat_chart(&mut doc, &trend));
        assert!(!create_threat_chart(&mut doc, &trend));
        assert_eq!(doc.canvas.as_ref().map(|c| c.instances_created), Some(1));
    }

    #[test]
    fn test_chart_skipped_without_canvas() {
        let mut doc = Document::empty();
        assert!(!create_threat_chart(&mut doc, &threat_trend()));
    }
}
