//! Repository for the `course_progress` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{CourseProgress, UpsertProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, course_id, completed_lessons, percent_complete, \
     last_accessed, created_at, updated_at";

/// Provides reads and the keyed create-or-replace write for progress records.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Point lookup for one (user, course) pair. `None` is the valid
    /// "not started" state, not an error.
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<CourseProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_progress WHERE user_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, CourseProgress>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// All progress records for a user, most recently accessed first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CourseProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_progress
             WHERE user_id = $1
             ORDER BY last_accessed DESC"
        );
        sqlx::query_as::<_, CourseProgress>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Create-or-replace keyed on (user_id, course_id): inserts on first
    /// toggle, otherwise replaces the completed set and percentage in place.
    /// `last_accessed` is bumped on every call.
    ///
    /// Concurrent upserts for the same pair are last-writer-wins (the sets
    /// are not merged); acceptable because a single user does not race
    /// against themselves.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertProgress,
    ) -> Result<CourseProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_progress (user_id, course_id, completed_lessons, percent_complete, last_accessed)
             VALUES ($1, $2, $3, $4, NOW())
             ON CONFLICT (user_id, course_id) DO UPDATE SET
                 completed_lessons = EXCLUDED.completed_lessons,
                 percent_complete = EXCLUDED.percent_complete,
                 last_accessed = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseProgress>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(&input.completed_lessons)
            .bind(input.percent_complete)
            .fetch_one(pool)
            .await
    }
}
