//! Black Fang HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Service banner
//! - `GET /app` - The dashboard page
//! - `GET /login` - Demo login page
//! - `GET /dashboard` - Client dashboard opened after login
//!
//! ## Auth
//! - `POST /api/auth/login` - Demo account check
//!
//! ## Dashboard
//! - `GET /api/v1/sections/:section` - Section view-model
//! - `GET /api/v1/sections/:section/html` - Section markup
//! - `GET /api/v1/chart` - Threat chart configuration
//! - `GET /api/v1/state` - Session snapshot
//! - `POST /api/v1/events` - Dispatch a page event
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use blackfang::api::{serve, ApiConfig, AppState};
//! use blackfang::data::DataStore;
//! use blackfang::session::Clock;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::new(DataStore::sample()), Clock::System, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sections/:section", get(routes::sections::section_json))
        .route("/sections/:section/html", get(routes::sections::section_html))
        .route("/chart", get(routes::sections::chart))
        .route("/state", get(routes::events::get_state))
        .route("/events", post(routes::events::dispatch_event));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::banner))
        .route("/app", get(routes::pages::app_page))
        .route("/login", get(routes::pages::login_page))
        .route("/dashboard", get(routes::pages::dashboard_page))
        .route("/api/auth/login", post(routes::auth::login))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Any origin when none are configured, otherwise just the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Black Fang Intelligence listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Black Fang Intelligence shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use crate::session::Clock;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::{TimeZone, Utc};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let now = Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap();
        let state = AppState::new(
            Arc::new(DataStore::sample()),
            Clock::Fixed(now),
            ApiConfig::default(),
        );
        build_router(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_banner() {
        let response = create_test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "operational");
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();

        let response = app.clone().oneshot(get("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["timestamp"], "2025-08-17");
        assert_eq!(json["competitors_monitored"], 3);
        assert_eq!(json["unread_alerts"], 2);
        assert_eq!(json["high_threats"], 1);
    }

    #[tokio::test]
    async fn test_login() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                r#"{"email": "demo@blackfangintel.com", "password": "demo123"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["client"]["id"], 1);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                r#"{"email": "demo@blackfangintel.com", "password": "guess"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(post_json("/api/auth/login", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Logging in is not navigation
        let response = app.oneshot(get("/api/v1/state")).await.unwrap();
        assert_eq!(body_json(response).await["logged_in"], false);
    }

    #[tokio::test]
    async fn test_app_page() {
        let response = create_test_app().oneshot(get("/app")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<section id="landing" class="section active">"#));
    }

    #[tokio::test]
    async fn test_login_page() {
        let response = create_test_app().oneshot(get("/login")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"<form id="loginForm">"#));
        assert!(html.contains("/api/auth/login"));
    }

    #[tokio::test]
    async fn test_client_dashboard() {
        let app = create_test_app();

        for uri in ["/dashboard", "/dashboard?client_id=1"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let html = body_text(response).await;
            assert!(html.contains(r#"<section id="dashboard" class="section active">"#));
            assert!(html.contains("new Chart"));
        }

        let response = app
            .clone()
            .oneshot(get("/dashboard?client_id=7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(get("/dashboard?client_id=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The shared session stays on the landing page
        let response = app.oneshot(get("/api/v1/state")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["current_section"], "landing");
        assert_eq!(json["logged_in"], false);
    }

    #[tokio::test]
    async fn test_sections() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(get("/api/v1/sections/alerts"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["section"], "alerts");
        assert_eq!(json["alerts"].as_array().map(Vec::len), Some(3));

        let response = app
            .clone()
            .oneshot(get("/api/v1/sections/reports/html"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#"id="reportsList""#));

        let response = app
            .clone()
            .oneshot(get("/api/v1/sections/billing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["request_id"].is_string());

        let response = app
            .oneshot(get("/api/v1/sections/billing/html"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart() {
        let response = create_test_app().oneshot(get("/api/v1/chart")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_events_drive_shared_session() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/events",
                r#"{"kind": "click", "target": {"id": "accessDashboard"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["actions"][0]["action"], "access_dashboard");
        assert_eq!(json["state"]["current_section"], "dashboard");
        assert_eq!(json["state"]["logged_in"], true);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/events",
                r#"{"kind": "submit", "target": {"id": "contactForm", "fields": {"contactName": "Asha"}}}"#,
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(
            json["notice"],
            "Thank you for your message! Our team will contact you soon."
        );

        let response = app.oneshot(get("/app")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains(r#"<section id="dashboard" class="section active">"#));
    }

    #[tokio::test]
    async fn test_event_invalid_json() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/events", r#"{"kind": "hover"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
