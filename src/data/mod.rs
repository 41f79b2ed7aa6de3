//! Black Fang Data Store
//!
//! Static, read-only competitor-intelligence data:
//!
//! - **types**: Record types (Competitor, Alert, Report, UserProfile, PricingPlan)
//! - **sample**: The built-in demo dataset
//! - **store**: `DataStore`, the immutable collection of all records
//! - **error**: Error types for loading a store from JSON
//!
//! Nothing in the crate mutates a store after construction. Rendering is a pure
//! projection of a store plus transient view state.

pub mod error;
pub mod sample;
pub mod store;
pub mod types;

pub use error::{DataError, DataResult};
pub use store::DataStore;
pub use types::{
    ActivityEvent, Alert, AlertCategory, Competitor, PriceChange, PricedItem, PricingPlan,
    Report, Severity, ThreatLevel, ThreatTrend, TrendSeries, UnknownSeverity, UserProfile,
};
