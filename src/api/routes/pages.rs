//! Page Routes
//!
//! - GET / - Service banner
//! - GET /app - The dashboard page, rendered from the shared session
//! - GET /login - Demo login page
//! - GET /dashboard?client_id=N - A client's dashboard, opened after login

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{BannerResponse, DashboardQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::auth::DEMO_CLIENT_ID;
use crate::api::state::AppState;
use crate::events::Action;
use crate::render::page::render_login_page;
use crate::session::Session;

/// Title of the served page
pub const PAGE_TITLE: &str = "Black Fang Intelligence";

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: format!("{} API", PAGE_TITLE),
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /app
///
/// The full page as the shared session currently shows it.
pub async fn app_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session.lock().await;
    Html(session.render_page(PAGE_TITLE))
}

/// GET /login
pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_login_page(
        PAGE_TITLE,
        &state.config.demo_email,
        &state.config.demo_password,
    ))
}

/// GET /dashboard
///
/// Renders on a fresh session opened at the dashboard, so the shared
/// session's navigation is left alone.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> ApiResult<Html<String>> {
    let Query(query) = query?;
    let client_id = query.client_id.unwrap_or(DEMO_CLIENT_ID);
    if client_id != DEMO_CLIENT_ID {
        return Err(ApiError::NotFound(format!("Client {} not found", client_id)));
    }

    let clock = state.session.lock().await.clock();
    let mut session = Session::new(Arc::clone(&state.store)).with_clock(clock);
    session.start();
    session.apply(&Action::AccessDashboard);

    Ok(Html(session.render_page(PAGE_TITLE)))
}
