//! HTTP-level integration tests for course creation, detail, lesson
//! appending, catalog search, and the teacher/admin views.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user and return their access token.
async fn register(pool: &PgPool, email: &str, role: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": email.split('@').next().unwrap(),
        "email": email,
        "password": "a-decent-password",
        "role": role,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create a course via the API and return its id.
async fn create_course(pool: &PgPool, token: &str, title: &str, category: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": title,
        "description": format!("All about {title}"),
        "category": category,
    });
    let response = post_json_auth(app, "/api/v1/courses", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}

/// Append a lesson via the API and return the response.
async fn add_lesson(
    pool: &PgPool,
    token: &str,
    course_id: i64,
    title: &str,
    duration: Option<i32>,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": title,
        "lesson_type": "video",
        "content": "lesson body",
        "duration_minutes": duration,
    });
    let response =
        post_json_auth(app, &format!("/api/v1/courses/{course_id}/lessons"), token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Creation and RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_can_create_course(pool: PgPool) {
    let token = register(&pool, "teach@example.com", "teacher").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "title": "Rust for Web",
        "description": "Servers without segfaults",
        "category": "Programming",
    });
    let response = post_json_auth(app, "/api/v1/courses", &token, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Rust for Web");
    assert_eq!(json["category"], "Programming");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn student_cannot_create_course(pool: PgPool) {
    let token = register(&pool, "pupil@example.com", "student").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "title": "Nope",
        "category": "Programming",
    });
    let response = post_json_auth(app, "/api/v1/courses", &token, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_title_is_rejected(pool: PgPool) {
    let token = register(&pool, "teach2@example.com", "teacher").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "title": "   ",
        "category": "Programming",
    });
    let response = post_json_auth(app, "/api/v1/courses", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn course_detail_includes_lessons_and_totals(pool: PgPool) {
    let token = register(&pool, "detail@example.com", "teacher").await;
    let course_id = create_course(&pool, &token, "Databases", "Programming").await;

    add_lesson(&pool, &token, course_id, "Tables", Some(30)).await;
    add_lesson(&pool, &token, course_id, "Joins", None).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{course_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Databases");
    assert_eq!(json["teacher_name"], "detail");
    assert_eq!(json["lessons"].as_array().unwrap().len(), 2);
    assert_eq!(json["enrolled_count"], 0);
    // A lesson without a duration contributes 0 to the sum.
    assert_eq!(json["total_duration_minutes"], 30);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_course_detail_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lessons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn lessons_get_contiguous_positions(pool: PgPool) {
    let token = register(&pool, "order@example.com", "teacher").await;
    let course_id = create_course(&pool, &token, "Ordering", "Programming").await;

    let first = add_lesson(&pool, &token, course_id, "One", Some(10)).await;
    let second = add_lesson(&pool, &token, course_id, "Two", Some(10)).await;
    let third = add_lesson(&pool, &token, course_id, "Three", Some(10)).await;

    assert_eq!(first["position"], 1);
    assert_eq!(second["position"], 2);
    assert_eq!(third["position"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_lesson_type_is_rejected(pool: PgPool) {
    let token = register(&pool, "types@example.com", "teacher").await;
    let course_id = create_course(&pool, &token, "Typed", "Programming").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Bad",
        "lesson_type": "podcast",
        "content": "",
    });
    let response =
        post_json_auth(app, &format!("/api/v1/courses/{course_id}/lessons"), &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_teacher_cannot_add_lesson(pool: PgPool) {
    let owner = register(&pool, "owner@example.com", "teacher").await;
    let other = register(&pool, "other@example.com", "teacher").await;
    let course_id = create_course(&pool, &owner, "Mine", "Programming").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "title": "Intrusion",
        "lesson_type": "video",
        "content": "",
    });
    let response =
        post_json_auth(app, &format!("/api/v1/courses/{course_id}/lessons"), &other, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn search_filters_compose(pool: PgPool) {
    let token = register(&pool, "catalog@example.com", "teacher").await;
    create_course(&pool, &token, "Intro to React", "Programming").await;
    create_course(&pool, &token, "Design Basics", "Design").await;

    // Text filter only.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/courses?q=react&category=all").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Intro to React");

    // Category filter only.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/courses?q=&category=Design").await;
    let json = body_json(response).await;
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Design Basics");

    // No filters: everything.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Teacher and admin views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_courses_lists_only_own(pool: PgPool) {
    let alpha = register(&pool, "alpha@example.com", "teacher").await;
    let beta = register(&pool, "beta@example.com", "teacher").await;
    create_course(&pool, &alpha, "Alpha Course", "Programming").await;
    create_course(&pool, &beta, "Beta Course", "Design").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/teacher/courses", &alpha).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Alpha Course");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_list_users(pool: PgPool) {
    register(&pool, "listed@example.com", "student").await;

    // Admins cannot self-register; seed one directly.
    let admin_role = campus_db::repositories::RoleRepo::find_by_name(&pool, "admin")
        .await
        .expect("role lookup should succeed")
        .expect("admin role should be seeded");
    let hashed = campus_api::auth::password::hash_password("a-decent-password")
        .expect("hashing should succeed");
    campus_db::repositories::UserRepo::create(
        &pool,
        &campus_db::models::user::CreateUser {
            name: "Root".to_string(),
            email: "root@example.com".to_string(),
            password_hash: hashed,
            role_id: admin_role.id,
        },
    )
    .await
    .expect("user creation should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "root@example.com",
        "password": "a-decent-password",
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u["role"] == "admin"));
    assert!(users.iter().any(|u| u["role"] == "student"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_users_requires_admin_role(pool: PgPool) {
    let token = register(&pool, "plain@example.com", "student").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
