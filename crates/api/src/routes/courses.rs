//! Route definitions for the `/courses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{courses, enrollments, progress};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET  /                                   -> search/list (public)
/// POST /                                   -> create (teacher|admin)
/// GET  /{id}                               -> detail (public)
/// POST /{id}/lessons                       -> append lesson (owner|admin)
/// GET  /{id}/students                      -> roster (owner|admin)
/// POST /{id}/enroll                        -> enroll (requires auth)
/// GET  /{id}/progress                      -> own progress (requires auth)
/// POST /{id}/lessons/{lesson_id}/toggle    -> toggle completion (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::search).post(courses::create))
        .route("/{id}", get(courses::detail))
        .route("/{id}/lessons", post(courses::add_lesson))
        .route("/{id}/students", get(courses::students))
        .route("/{id}/enroll", post(enrollments::enroll))
        .route("/{id}/progress", get(progress::course_progress))
        .route(
            "/{id}/lessons/{lesson_id}/toggle",
            post(progress::toggle),
        )
}
