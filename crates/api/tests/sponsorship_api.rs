//! HTTP-level integration tests for the sponsorships endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

async fn create_company(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, "/api/companies", serde_json::json!({"name": name})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sponsorship_returns_201(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"companyId": company_id, "type": "Gold", "value": 500, "notes": "booth"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["companyId"], company_id);
    assert_eq!(json["type"], "Gold");
    assert_eq!(json["value"], 500.0);
    assert_eq!(json["item"], serde_json::Value::Null);
    assert_eq!(json["notes"], "booth");
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sponsorship_without_company_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"value": 100}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "companyId is required for sponsorship");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sponsorship_unknown_company_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"companyId": 999999, "value": 100}),
    )
    .await;

    // Foreign-key violation surfaces as a generic server error, not a
    // dedicated "invalid reference" message.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_omitted_value_stores_zero(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"companyId": company_id, "item": "silent auction basket"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["value"], 0.0);
    assert_eq!(json["item"], "silent auction basket");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_string_value_is_coerced(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"companyId": company_id, "value": "12.5"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["value"], 12.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_value_returns_400(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/sponsorships",
        serde_json::json!({"companyId": company_id, "value": "a lot"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sponsorships_newest_first_with_camel_case(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    for value in [100, 200] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/sponsorships",
            serde_json::json!({"companyId": company_id, "value": value}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/sponsorships").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["value"], 200.0);
    assert_eq!(rows[1]["value"], 100.0);

    // Storage casing must not leak into the contract.
    let first = rows[0].as_object().unwrap();
    assert!(first.contains_key("companyId"));
    assert!(first.contains_key("createdAt"));
    assert!(!first.contains_key("company_id"));
    assert!(!first.contains_key("created_at"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sponsorship(pool: PgPool) {
    let company_id = create_company(&pool, "Acme").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/sponsorships",
            serde_json::json!({"companyId": company_id, "value": 50}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/sponsorships/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/sponsorships").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_sponsorship_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/sponsorships/777").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Sponsorship not found");
}
