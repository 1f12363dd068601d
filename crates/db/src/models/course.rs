//! Course entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    pub teacher_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A course annotated with its teacher's display name, as returned by
/// listing/search queries. `teacher_name` falls back to `"Unknown Teacher"`
/// when the owning user row is missing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseWithTeacher {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course. The owning teacher comes from the
/// authenticated identity, not from the payload.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}
