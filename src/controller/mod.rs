//! View-State Controller
//!
//! Everything that changes what the page shows:
//!
//! - **state**: `Section` and the session's `ViewState`
//! - **navigation**: `navigate_to`, the section state machine
//! - **filter**: alert severity filtering
//! - **modal**: the add-competitor modal toggle
//! - **forms**: simulated form submissions
//!
//! All operations are synchronous and run on whichever task owns the session.

pub mod filter;
pub mod forms;
pub mod modal;
pub mod navigation;
pub mod state;

pub use filter::apply_filter;
pub use forms::{submit_form, ADD_COMPETITOR_ACK, CONTACT_ACK};
pub use modal::{hide_modal, is_modal_open, show_modal};
pub use navigation::{active_links, navigate_to};
pub use state::{Section, UnknownSection, ViewState, FILTER_ALL};
