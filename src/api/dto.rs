//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::events::Action;
use crate::session::SessionSnapshot;

// ============================================
// ROOT DTOs
// ============================================

/// Service banner returned by `GET /`
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    /// Always "operational" while the process serves requests
    pub status: String,
    pub version: String,
}

// ============================================
// AUTH DTOs
// ============================================

/// Demo login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Query of the client dashboard page
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Client whose dashboard to show; the demo client when absent
    #[serde(default)]
    pub client_id: Option<u32>,
}

/// Successful demo login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub client: ClientInfo,
}

/// The client account behind the demo login
#[derive(Debug, Serialize)]
pub struct ClientInfo {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company: String,
}

// ============================================
// SESSION DTOs
// ============================================

/// Result of dispatching an event on the shared session
#[derive(Debug, Serialize)]
pub struct EventResponse {
    /// Actions the dispatch table produced, in order
    pub actions: Vec<Action>,
    /// Acknowledgment shown to the user, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub state: SessionSnapshot,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Current date as the dashboard sees it (YYYY-MM-DD)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Competitors in the data store
    pub competitors_monitored: usize,
    /// Alerts not yet read
    pub unread_alerts: usize,
    /// Competitors at the HIGH threat level
    pub high_threats: usize,
    /// Application version
    pub version: String,
}
