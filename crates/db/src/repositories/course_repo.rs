//! Repository for the `courses` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CourseWithTeacher, CreateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, thumbnail, teacher_id, created_at, updated_at";

/// Joined column list for queries that resolve the teacher's display name.
const JOINED_COLUMNS: &str = "c.id, c.title, c.description, c.category, c.thumbnail, \
     c.teacher_id, COALESCE(u.name, 'Unknown Teacher') AS teacher_name, \
     c.created_at, c.updated_at";

/// Provides CRUD and search operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course owned by `teacher_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        teacher_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, description, category, thumbnail, teacher_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.thumbnail)
            .bind(teacher_id)
            .fetch_one(pool)
            .await
    }

    /// Find a course by ID, annotated with the teacher's display name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseWithTeacher>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM courses c
             LEFT JOIN users u ON u.id = c.teacher_id
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, CourseWithTeacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses owned by a teacher, newest first.
    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<CourseWithTeacher>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM courses c
             LEFT JOIN users u ON u.id = c.teacher_id
             WHERE c.teacher_id = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CourseWithTeacher>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// Search the catalog. Both filters are optional and ANDed:
    ///
    /// - `query`: case-insensitive substring match on title OR description;
    /// - `category`: exact match (the `"all"` sentinel is resolved to `None`
    ///   by the handler).
    ///
    /// With neither filter this is the full listing, newest first.
    pub async fn search(
        pool: &PgPool,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<CourseWithTeacher>, sqlx::Error> {
        let sql = format!(
            "SELECT {JOINED_COLUMNS}
             FROM courses c
             LEFT JOIN users u ON u.id = c.teacher_id
             WHERE ($1::TEXT IS NULL
                    OR c.title ILIKE '%' || $1 || '%'
                    OR c.description ILIKE '%' || $1 || '%')
               AND ($2::TEXT IS NULL OR c.category = $2)
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CourseWithTeacher>(&sql)
            .bind(query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
