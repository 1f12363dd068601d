//! Route definitions for the `/me` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{enrollments, progress};
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /courses   -> enrolled courses (requires auth)
/// GET /progress  -> all progress records (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(enrollments::my_courses))
        .route("/progress", get(progress::my_progress))
}
