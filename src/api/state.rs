//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::data::DataStore;
use crate::session::{Clock, Session};

/// Shared application state for all handlers
pub struct AppState {
    /// Read-only dashboard data
    pub store: Arc<DataStore>,
    /// The one dashboard session every page view shares
    pub session: Mutex<Session>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with a freshly started session over `store`
    pub fn new(store: Arc<DataStore>, clock: Clock, config: ApiConfig) -> Self {
        let mut session = Session::new(Arc::clone(&store)).with_clock(clock);
        session.start();
        Self::with_session(session, config)
    }

    /// Create state around an existing session
    pub fn with_session(session: Session, config: ApiConfig) -> Self {
        Self {
            store: session.shared_store(),
            session: Mutex::new(session),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Current time as the session sees it
    pub async fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.session.lock().await.now()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty allows any
    pub cors_origins: Vec<String>,
    /// Demo account accepted by the login endpoint
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::from_config(&Config::default())
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// The server-facing slice of the application config
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            cors_origins: config.server.cors_origins.clone(),
            demo_email: config.dashboard.demo_email.clone(),
            demo_password: config.dashboard.demo_password.clone(),
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
