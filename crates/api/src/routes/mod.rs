pub mod admin;
pub mod auth;
pub mod courses;
pub mod health;
pub mod me;
pub mod teacher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                            register (public)
/// /auth/login                               login (public)
/// /auth/refresh                             refresh (public)
/// /auth/logout                              logout (requires auth)
/// /auth/me                                  current identity (requires auth)
///
/// /courses?q=&category=                     catalog search/list (public)
/// /courses                                  create (teacher|admin, POST)
/// /courses/{id}                             detail (public)
/// /courses/{id}/lessons                     append lesson (owner|admin, POST)
/// /courses/{id}/students                    roster (owner|admin)
/// /courses/{id}/enroll                      enroll (requires auth, POST)
/// /courses/{id}/progress                    own progress (requires auth)
/// /courses/{id}/lessons/{lesson_id}/toggle  toggle completion (requires auth, POST)
///
/// /me/courses                               enrolled courses (requires auth)
/// /me/progress                              all progress records (requires auth)
///
/// /teacher/courses                          own courses (teacher|admin)
///
/// /admin/users                              list users (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration, login, and session management.
        .nest("/auth", auth::router())
        // Catalog, course detail, lessons, enrollment, progress.
        .nest("/courses", courses::router())
        // The authenticated user's enrolled courses and progress.
        .nest("/me", me::router())
        // Teacher's own course listing.
        .nest("/teacher", teacher::router())
        // Admin user management.
        .nest("/admin", admin::router())
}
