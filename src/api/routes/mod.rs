//! API Routes
//!
//! Route handlers organized by functionality.

pub mod auth;
pub mod events;
pub mod health;
pub mod pages;
pub mod sections;
