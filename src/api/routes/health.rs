//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::data::ThreatLevel;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. The dashboard has no external dependencies, so a
/// responding server is always healthy.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let today = state.now().await.format("%Y-%m-%d").to_string();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: today,
        uptime_seconds: state.uptime_seconds(),
        competitors_monitored: state.store.competitors.len(),
        unread_alerts: state.store.unread_count(),
        high_threats: state.store.threat_count(ThreatLevel::High),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
