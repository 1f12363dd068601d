//! Lesson entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lesson types accepted by the `lessons.lesson_type` CHECK constraint.
pub const LESSON_TYPES: &[&str] = &["video", "reading", "quiz"];

/// A lesson row from the `lessons` table.
///
/// `position` is 1-based and contiguous within a course: it is assigned at
/// append time and lessons are never reordered or removed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub lesson_type: String,
    pub content: String,
    /// Optional length in minutes; `None` contributes 0 to duration sums.
    pub duration_minutes: Option<i32>,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a lesson to a course. Position is assigned by the
/// repository, never by the caller.
#[derive(Debug, Deserialize)]
pub struct CreateLesson {
    pub title: String,
    pub lesson_type: String,
    #[serde(default)]
    pub content: String,
    pub duration_minutes: Option<i32>,
}
