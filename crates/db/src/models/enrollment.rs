//! Enrollment model: one row per (user, course) pair.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub user_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
}

/// A roster entry: an enrolled student with display fields resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledStudent {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub enrolled_at: Timestamp,
}
