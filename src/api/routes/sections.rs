//! Section Routes
//!
//! Read-only views of the dashboard data. These render straight from the
//! store and leave the shared session untouched.
//!
//! - GET /api/v1/sections/:section - Section view-model as JSON
//! - GET /api/v1/sections/:section/html - Section markup
//! - GET /api/v1/chart - Threat chart configuration

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::controller::Section;
use crate::render::{self, ChartConfig, RenderContext, SectionView};

fn parse_section(id: &str) -> ApiResult<Section> {
    id.parse()
        .map_err(|_| ApiError::NotFound(format!("Section '{}' not found", id)))
}

/// GET /api/v1/sections/:section
pub async fn section_json(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SectionView>> {
    let section = parse_section(&id)?;
    let now = state.now().await;
    let ctx = RenderContext::new(&state.store, now);

    Ok(Json(render::section_view(section, &ctx)))
}

/// GET /api/v1/sections/:section/html
pub async fn section_html(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let section = parse_section(&id)?;
    let now = state.now().await;
    let ctx = RenderContext::new(&state.store, now);

    Ok(Html(render::section_fragment(section, &ctx)))
}

/// GET /api/v1/chart
pub async fn chart(State(state): State<Arc<AppState>>) -> Json<ChartConfig> {
    Json(ChartConfig::threat_trend(&state.store.threat_trend))
}
