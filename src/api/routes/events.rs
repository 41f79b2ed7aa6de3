//! Session Routes
//!
//! - GET /api/v1/state - Snapshot of the shared session
//! - POST /api/v1/events - Dispatch a click or submit on the shared session

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::EventResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::events::Event;
use crate::session::SessionSnapshot;

/// GET /api/v1/state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(session.snapshot())
}

/// POST /api/v1/events
pub async fn dispatch_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Event>, JsonRejection>,
) -> ApiResult<Json<EventResponse>> {
    let Json(event) = payload?;

    let mut session = state.session.lock().await;
    let outcome = session.dispatch(&event);

    Ok(Json(EventResponse {
        actions: outcome.actions,
        notice: outcome.notice,
        state: session.snapshot(),
    }))
}
