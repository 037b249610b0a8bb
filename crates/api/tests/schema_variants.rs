//! Tests for name-column tolerance at the HTTP surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_legacy_name_column_serves_requests(pool: PgPool) {
    sqlx::query("ALTER TABLE areas RENAME COLUMN area_name TO name")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO areas (name, description) VALUES ('Old Grove', NULL)")
        .execute(&pool)
        .await
        .unwrap();

    let json = body_json(get(build_test_app(pool), "/api/animals?action=areas").await).await;
    assert_eq!(json[0]["name"], "Old Grove");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_area_name_wins_when_both_columns_exist(pool: PgPool) {
    common::seed_area(&pool, "Preferred").await;
    sqlx::query("ALTER TABLE areas ADD COLUMN name TEXT DEFAULT 'Shadowed'")
        .execute(&pool)
        .await
        .unwrap();

    let json = body_json(get(build_test_app(pool), "/api/animals?action=areas").await).await;
    assert_eq!(json[0]["name"], "Preferred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_neither_column_fails_every_request(pool: PgPool) {
    sqlx::query("ALTER TABLE areas DROP COLUMN area_name")
        .execute(&pool)
        .await
        .unwrap();

    let expected = "areas table does not have 'area_name' or 'name' column";

    // Reads fail with the descriptive message, not a panic.
    let response = get(build_test_app(pool.clone()), "/api/animals?action=areas").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], expected);

    // Writes resolve the column before touching animals, so they fail too.
    let response = post_json(
        build_test_app(pool),
        "/api/animals?action=animal",
        serde_json::json!({"common_name": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], expected);
}
