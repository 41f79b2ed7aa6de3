//! Auth Routes
//!
//! - POST /api/auth/login - Demo account check
//!
//! The check compares against the configured demo credentials and nothing
//! else. It never changes the session's logged-in flag, which only tracks
//! navigation into gated sections.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ClientInfo, LoginRequest, LoginResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// The only client the demo knows
pub const DEMO_CLIENT_ID: u32 = 1;
const DEMO_CLIENT_COMPANY: &str = "Demo Motors Pvt Ltd";

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    if request.email != state.config.demo_email || request.password != state.config.demo_password
    {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    tracing::info!(email = %request.email, "Demo login");

    Ok(Json(LoginResponse {
        success: true,
        client: ClientInfo {
            id: DEMO_CLIENT_ID,
            name: state.store.user_profile.company.clone(),
            email: request.email,
            company: DEMO_CLIENT_COMPANY.to_string(),
        },
    }))
}
