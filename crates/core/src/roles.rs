//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_ADMIN: &str = "admin";

/// Roles a user may pick at registration. `admin` accounts are provisioned
/// out of band, never self-assigned.
pub const SELF_REGISTER_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_TEACHER];
