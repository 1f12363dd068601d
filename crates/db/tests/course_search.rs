//! Integration tests for catalog search filter composition.

use sqlx::PgPool;
use campus_db::models::course::CreateCourse;
use campus_db::models::user::CreateUser;
use campus_db::repositories::{CourseRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ROLE_ID_TEACHER: i64 = 2;

async fn seed_catalog(pool: &PgPool) -> i64 {
    let teacher = UserRepo::create(
        pool,
        &CreateUser {
            name: "Ada".to_string(),
            email: "ada@test.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role_id: ROLE_ID_TEACHER,
        },
    )
    .await
    .unwrap();

    for (title, category) in [
        ("Intro to React", "Programming"),
        ("Design Basics", "Design"),
    ] {
        CourseRepo::create(
            pool,
            teacher.id,
            &CreateCourse {
                title: title.to_string(),
                description: String::new(),
                category: category.to_string(),
                thumbnail: String::new(),
            },
        )
        .await
        .unwrap();
    }

    teacher.id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn text_filter_is_case_insensitive_substring(pool: PgPool) {
    seed_catalog(&pool).await;

    let results = CourseRepo::search(&pool, Some("react"), None).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Intro to React");
}

#[sqlx::test(migrations = "./migrations")]
async fn category_filter_is_exact(pool: PgPool) {
    seed_catalog(&pool).await;

    let results = CourseRepo::search(&pool, None, Some("Design")).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Design Basics");
}

#[sqlx::test(migrations = "./migrations")]
async fn no_filters_returns_everything_newest_first(pool: PgPool) {
    seed_catalog(&pool).await;

    let results = CourseRepo::search(&pool, None, None).await.unwrap();
    assert_eq!(results.len(), 2);
    // Newest-first ordering for the unfiltered listing.
    assert!(results[0].created_at >= results[1].created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn filters_compose_with_and(pool: PgPool) {
    seed_catalog(&pool).await;

    let hit = CourseRepo::search(&pool, Some("design"), Some("Design"))
        .await
        .unwrap();
    assert_eq!(hit.len(), 1);

    let miss = CourseRepo::search(&pool, Some("react"), Some("Design"))
        .await
        .unwrap();
    assert!(miss.is_empty(), "both filters must match");
}

#[sqlx::test(migrations = "./migrations")]
async fn description_is_searched_too(pool: PgPool) {
    let teacher = seed_catalog(&pool).await;
    CourseRepo::create(
        &pool,
        teacher,
        &CreateCourse {
            title: "Advanced Topics".to_string(),
            description: "Deep dive into React internals".to_string(),
            category: "Programming".to_string(),
            thumbnail: String::new(),
        },
    )
    .await
    .unwrap();

    let results = CourseRepo::search(&pool, Some("react"), None).await.unwrap();
    assert_eq!(results.len(), 2, "matches on title OR description");
}

#[sqlx::test(migrations = "./migrations")]
async fn search_results_carry_teacher_name(pool: PgPool) {
    seed_catalog(&pool).await;

    let results = CourseRepo::search(&pool, None, None).await.unwrap();
    assert!(results.iter().all(|c| c.teacher_name == "Ada"));
}
