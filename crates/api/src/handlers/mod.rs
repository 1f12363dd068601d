//! HTTP handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod progress;
