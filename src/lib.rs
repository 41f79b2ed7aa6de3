//! # Black Fang
//!
//! Black Fang Intelligence - A competitor-intelligence demo dashboard served
//! from Rust. A single page with a marketing landing section and five gated
//! dashboard sections, rendered server-side from a read-only data store.
//!
//! ## Modules
//!
//! - [`data`]: Competitors, alerts, reports, profile and plans, plus the sample set
//! - [`format`]: Relative-age and long-date formatting
//! - [`dom`]: The page's element tree as plain data
//! - [`render`]: View-models, HTML fragments, the threat chart and the full page
//! - [`controller`]: Navigation, alert filtering, the modal and form handlers
//! - [`events`]: The dispatch table from page events to actions
//! - [`session`]: One viewer's page tying the above together
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blackfang::data::DataStore;
//! use blackfang::events::{Event, Target};
//! use blackfang::session::Session;
//! use std::sync::Arc;
//!
//! let mut session = Session::new(Arc::new(DataStore::sample()));
//! session.start();
//!
//! session.dispatch(&Event::click(Target::with_id("accessDashboard")));
//! assert!(session.state.logged_in);
//!
//! let html = session.render_page("Black Fang Intelligence");
//! println!("{} bytes of dashboard", html.len());
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod data;
pub mod dom;
pub mod events;
pub mod format;
pub mod render;
pub mod session;

// Re-export top-level types for convenience
pub use data::{DataError, DataResult, DataStore};

pub use controller::{navigate_to, Section, ViewState};

pub use dom::Document;

pub use events::{Action, Event, EventKind, EventRouter, Target};

pub use session::{Clock, DispatchOutcome, Session, SessionSnapshot};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ServerConfig};
