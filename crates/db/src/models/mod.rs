//! Entity models and DTOs.
//!
//! Each submodule holds the `FromRow` entity struct for one table plus the
//! create/update DTOs that flow in from the API layer.

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod role;
pub mod session;
pub mod user;
