//! Course progress model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A progress row from the `course_progress` table: the completed-lesson set
/// and the derived percentage for one (user, course) pair.
///
/// `percent_complete` is recomputed against the course's *live* lesson count
/// on every toggle, so it is not guaranteed to stay within [0, 100] if the
/// course shape changes after completion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseProgress {
    pub user_id: DbId,
    pub course_id: DbId,
    pub completed_lessons: Vec<DbId>,
    pub percent_complete: f64,
    pub last_accessed: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the create-or-replace progress write.
pub struct UpsertProgress {
    pub user_id: DbId,
    pub course_id: DbId,
    pub completed_lessons: Vec<DbId>,
    pub percent_complete: f64,
}
