//! Repository for the `enrollments` table.
//!
//! An enrollment is a single row keyed on (user_id, course_id). The
//! original design mirrored the link on both the user and course records,
//! which left a window where the two sides could disagree; with one row
//! there is nothing to keep in sync -- a student's course list and a
//! course's roster are two reads of the same table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::CourseWithTeacher;
use crate::models::enrollment::EnrolledStudent;

/// Provides enrollment writes and the two derived views.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course. Idempotent: re-enrolling an already
    /// enrolled user is a no-op, reported by the `false` return.
    ///
    /// Enrolling against a nonexistent user or course fails the foreign key
    /// rather than silently matching nothing.
    pub async fn enroll(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, course_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(course_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the user is enrolled in the course.
    pub async fn is_enrolled(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2
             )",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
    }

    /// The courses a user is enrolled in, most recently enrolled first,
    /// annotated with teacher names.
    pub async fn courses_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CourseWithTeacher>, sqlx::Error> {
        sqlx::query_as::<_, CourseWithTeacher>(
            "SELECT c.id, c.title, c.description, c.category, c.thumbnail,
                    c.teacher_id, COALESCE(u.name, 'Unknown Teacher') AS teacher_name,
                    c.created_at, c.updated_at
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             LEFT JOIN users u ON u.id = c.teacher_id
             WHERE e.user_id = $1
             ORDER BY e.enrolled_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Just the course ids a user is enrolled in, oldest enrollment first.
    pub async fn course_ids_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT course_id FROM enrollments WHERE user_id = $1 ORDER BY enrolled_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// A course's roster, in enrollment order.
    pub async fn students_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<EnrolledStudent>, sqlx::Error> {
        sqlx::query_as::<_, EnrolledStudent>(
            "SELECT u.id, u.name, u.email, e.enrolled_at
             FROM enrollments e
             JOIN users u ON u.id = e.user_id
             WHERE e.course_id = $1
             ORDER BY e.enrolled_at ASC",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
    }

    /// Number of students enrolled in a course.
    pub async fn count_for_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await
    }
}
