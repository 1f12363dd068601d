//! Repository for the `lessons` table (append-only).

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson::{CreateLesson, Lesson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, title, lesson_type, content, duration_minutes, \
     position, created_at, updated_at";

/// Provides append and read operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Append a lesson to the end of a course, returning the created row.
    ///
    /// The 1-based position is computed inside the INSERT itself
    /// (`MAX(position) + 1` over the course's existing lessons), so a single
    /// statement both reads and claims the next slot. Two concurrent appends
    /// can still compute the same position, but `uq_lessons_course_position`
    /// then fails one of them with a unique violation (surfaced as a 409)
    /// instead of committing duplicate positions.
    pub async fn append(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateLesson,
    ) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (course_id, title, lesson_type, content, duration_minutes, position)
             SELECT $1, $2, $3, $4, $5, COALESCE(MAX(position), 0) + 1
             FROM lessons WHERE course_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.lesson_type)
            .bind(&input.content)
            .bind(input.duration_minutes)
            .fetch_one(pool)
            .await
    }

    /// List a course's lessons in position order.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons WHERE course_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Current lesson count for a course. This is the live total the
    /// progress percentage is computed against.
    pub async fn count_for_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM lessons WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Sum of lesson durations for a course in minutes. Lessons without a
    /// duration contribute 0.
    pub async fn total_duration_minutes(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(duration_minutes), 0)::BIGINT
             FROM lessons WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_one(pool)
        .await
    }
}
