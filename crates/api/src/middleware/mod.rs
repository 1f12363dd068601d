//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireTeacher`] -- requires `teacher` or `admin` role.
//! - [`rbac::RequireAuth`] -- requires any authenticated user.

pub mod auth;
pub mod rbac;
