//! Handlers for the `/courses` and `/teacher/courses` resources.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::roles::ROLE_ADMIN;
use campus_core::types::DbId;
use campus_db::models::course::{Course, CourseWithTeacher, CreateCourse};
use campus_db::models::enrollment::EnrolledStudent;
use campus_db::models::lesson::{CreateLesson, Lesson, LESSON_TYPES};
use campus_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireTeacher;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /courses`.
///
/// Both filters are optional. An empty `q` means "no text filter"; the
/// `category` value `"all"` is a sentinel meaning "every category".
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Response body for `GET /courses/{id}`: the course plus everything a
/// detail page shows in one round trip.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: CourseWithTeacher,
    pub lessons: Vec<Lesson>,
    pub enrolled_count: i64,
    /// Sum of lesson durations in minutes; lessons without one count as 0.
    pub total_duration_minutes: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/courses?q=&category=
///
/// Search the catalog. No filters means the full listing, newest first.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CourseWithTeacher>>> {
    // Empty string and the "all" sentinel both mean "no filter".
    let query = params.q.as_deref().filter(|q| !q.is_empty());
    let category = params
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    let courses = CourseRepo::search(&state.pool, query, category).await?;
    Ok(Json(courses))
}

/// POST /api/v1/courses
///
/// Create a course owned by the authenticated teacher (or admin).
pub async fn create(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Course title must not be empty".into(),
        )));
    }

    let course = CourseRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(course_id = course.id, teacher_id = user.user_id, "course created");

    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses/{id}
///
/// Course detail: metadata + teacher name + ordered lessons + roster size +
/// total duration.
pub async fn detail(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<CourseDetail>> {
    let course = find_course(&state, course_id).await?;

    let lessons = LessonRepo::list_for_course(&state.pool, course_id).await?;
    let enrolled_count = EnrollmentRepo::count_for_course(&state.pool, course_id).await?;
    let total_duration_minutes =
        LessonRepo::total_duration_minutes(&state.pool, course_id).await?;

    Ok(Json(CourseDetail {
        course,
        lessons,
        enrolled_count,
        total_duration_minutes,
    }))
}

/// POST /api/v1/courses/{id}/lessons
///
/// Append a lesson to the end of the course. Only the owning teacher or an
/// admin may do this. Lessons are never reordered or removed.
pub async fn add_lesson(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    RequireTeacher(user): RequireTeacher,
    Json(input): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    let course = find_course(&state, course_id).await?;
    require_course_owner(&user, &course)?;

    if !LESSON_TYPES.contains(&input.lesson_type.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid lesson type '{}'. Expected one of: {}",
            input.lesson_type,
            LESSON_TYPES.join(", ")
        ))));
    }

    let lesson = LessonRepo::append(&state.pool, course_id, &input).await?;
    tracing::info!(
        course_id,
        lesson_id = lesson.id,
        position = lesson.position,
        "lesson appended"
    );

    Ok((StatusCode::CREATED, Json(lesson)))
}

/// GET /api/v1/courses/{id}/students
///
/// The course roster, visible to the owning teacher or an admin.
pub async fn students(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    RequireTeacher(user): RequireTeacher,
) -> AppResult<Json<Vec<EnrolledStudent>>> {
    let course = find_course(&state, course_id).await?;
    require_course_owner(&user, &course)?;

    let roster = EnrollmentRepo::students_for_course(&state.pool, course_id).await?;
    Ok(Json(roster))
}

/// GET /api/v1/teacher/courses
///
/// The authenticated teacher's own courses, newest first.
pub async fn teacher_courses(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
) -> AppResult<Json<Vec<CourseWithTeacher>>> {
    let courses = CourseRepo::list_by_teacher(&state.pool, user.user_id).await?;
    Ok(Json(courses))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a course or return a 404.
pub(crate) async fn find_course(
    state: &AppState,
    course_id: DbId,
) -> AppResult<CourseWithTeacher> {
    CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Course",
                id: course_id,
            })
        })
}

/// Owning teacher or admin only.
fn require_course_owner(user: &AuthUser, course: &CourseWithTeacher) -> AppResult<()> {
    if course.teacher_id != user.user_id && user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the course owner may do this".into(),
        )));
    }
    Ok(())
}
