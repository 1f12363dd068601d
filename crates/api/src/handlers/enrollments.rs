//! Handlers for enrollment: joining a course and listing joined courses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::course::CourseWithTeacher;
use campus_db::repositories::EnrollmentRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::courses::find_course;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Response body for `POST /courses/{id}/enroll`.
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub course_id: DbId,
    /// `false` when the user was already enrolled (the call is a no-op).
    pub newly_enrolled: bool,
}

/// POST /api/v1/courses/{id}/enroll
///
/// Enroll the authenticated user in a course. Idempotent: enrolling twice
/// leaves a single enrollment and reports `newly_enrolled: false`.
pub async fn enroll(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<(StatusCode, Json<EnrollResponse>)> {
    // 404 before the write so a missing course is reported as such rather
    // than as a foreign key failure.
    find_course(&state, course_id).await?;

    let newly_enrolled = EnrollmentRepo::enroll(&state.pool, user.user_id, course_id).await?;
    if newly_enrolled {
        tracing::info!(user_id = user.user_id, course_id, "user enrolled");
    }

    let status = if newly_enrolled {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(EnrollResponse {
            course_id,
            newly_enrolled,
        }),
    ))
}

/// GET /api/v1/me/courses
///
/// The authenticated user's enrolled courses, most recently joined first.
pub async fn my_courses(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<Vec<CourseWithTeacher>>> {
    let courses = EnrollmentRepo::courses_for_user(&state.pool, user.user_id).await?;
    Ok(Json(courses))
}
