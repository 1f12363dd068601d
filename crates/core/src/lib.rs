//! Domain core for the campus platform.
//!
//! Dependency-light crate holding the shared type aliases, the error
//! taxonomy, role-name constants, and the pure progress-tracking logic.
//! Everything HTTP- or SQL-shaped lives in `campus-api` / `campus-db`.

pub mod error;
pub mod progress;
pub mod roles;
pub mod types;
