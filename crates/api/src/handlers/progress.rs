//! Handlers for per-course progress: reading it and toggling lesson completion.

use axum::extract::{Path, State};
use axum::Json;
use campus_core::progress::{completion_percent, toggle_lesson};
use campus_core::types::{DbId, Timestamp};
use campus_db::models::progress::{CourseProgress, UpsertProgress};
use campus_db::repositories::{LessonRepo, ProgressRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::courses::find_course;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Progress as reported to clients.
///
/// A user who never toggled a lesson in a course has no row; that is a valid
/// "not started" state and is reported as an empty record with
/// `last_accessed: null`, never as an error.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub course_id: DbId,
    pub completed_lessons: Vec<DbId>,
    pub percent_complete: f64,
    pub last_accessed: Option<Timestamp>,
}

impl ProgressResponse {
    fn not_started(course_id: DbId) -> Self {
        Self {
            course_id,
            completed_lessons: Vec::new(),
            percent_complete: 0.0,
            last_accessed: None,
        }
    }
}

impl From<CourseProgress> for ProgressResponse {
    fn from(row: CourseProgress) -> Self {
        Self {
            course_id: row.course_id,
            completed_lessons: row.completed_lessons,
            percent_complete: row.percent_complete,
            last_accessed: Some(row.last_accessed),
        }
    }
}

/// GET /api/v1/courses/{id}/progress
///
/// The authenticated user's progress in a course.
pub async fn course_progress(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<ProgressResponse>> {
    find_course(&state, course_id).await?;

    let response = ProgressRepo::find_by_user_and_course(&state.pool, user.user_id, course_id)
        .await?
        .map(ProgressResponse::from)
        .unwrap_or_else(|| ProgressResponse::not_started(course_id));

    Ok(Json(response))
}

/// POST /api/v1/courses/{id}/lessons/{lesson_id}/toggle
///
/// Flip the completion state of one lesson and store the recomputed
/// percentage. Toggling twice restores the prior state.
///
/// The percentage denominator is the course's lesson count *at call time*,
/// so appending lessons retroactively lowers everyone's percentage on their
/// next toggle. The lesson id is taken as given and not checked against the
/// course's lesson list.
pub async fn toggle(
    State(state): State<AppState>,
    Path((course_id, lesson_id)): Path<(DbId, DbId)>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<ProgressResponse>> {
    find_course(&state, course_id).await?;

    let total_lessons = LessonRepo::count_for_course(&state.pool, course_id).await?;

    let existing = ProgressRepo::find_by_user_and_course(&state.pool, user.user_id, course_id)
        .await?
        .map(|row| row.completed_lessons)
        .unwrap_or_default();

    let completed = toggle_lesson(&existing, lesson_id);
    let percent = completion_percent(completed.len(), total_lessons);

    let row = ProgressRepo::upsert(
        &state.pool,
        &UpsertProgress {
            user_id: user.user_id,
            course_id,
            completed_lessons: completed,
            percent_complete: percent,
        },
    )
    .await?;

    tracing::debug!(
        user_id = user.user_id,
        course_id,
        lesson_id,
        percent_complete = row.percent_complete,
        "lesson toggled"
    );

    Ok(Json(ProgressResponse::from(row)))
}

/// GET /api/v1/me/progress
///
/// All of the authenticated user's progress records, most recently
/// accessed first.
pub async fn my_progress(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let rows = ProgressRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(rows.into_iter().map(ProgressResponse::from).collect()))
}
