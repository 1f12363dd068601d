//! Route definitions for the `/teacher` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/teacher`.
///
/// ```text
/// GET /courses  -> own courses (teacher|admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/courses", get(courses::teacher_courses))
}
