//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod webinars;

pub use webinars::{change_seats, organize_webinar};
