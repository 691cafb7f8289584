mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{response_json, TestApp};

#[tokio::test]
async fn category_lifecycle_over_http() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(json!({"category_name": "Tools", "section_name": "A1"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("category id");
    assert!(id > 0);

    let response = app
        .request(Method::GET, &format!("/api/v1/categories/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = response_json(response).await;
    assert_eq!(fetched["category_name"], "Tools");
    assert_eq!(fetched["section_name"], "A1");

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/categories/{id}"),
            Some(json!({"category_name": "Hand tools", "section_name": "A2"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["section_name"], "A2");

    let response = app
        .request(Method::DELETE, &format!("/api/v1/categories/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response_json(response).await["message"].is_string());

    let response = app
        .request(Method::GET, &format!("/api/v1/categories/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn unit_pages_follow_page_id_and_page_size() {
    let app = TestApp::new().await;
    for _ in 0..7 {
        app.seed_unit().await;
    }

    let response = app
        .request(Method::GET, "/api/v1/units?page_id=1&page_size=5", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = response_json(response).await;
    assert_eq!(first.as_array().map(Vec::len), Some(5));

    let response = app
        .request(Method::GET, "/api/v1/units?page_id=2&page_size=5", None)
        .await;
    let second = response_json(response).await;
    assert_eq!(second.as_array().map(Vec::len), Some(2));

    let response = app
        .request(Method::GET, "/api/v1/units?page_id=1&page_size=10000", None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn good_lifecycle_over_http() {
    let app = TestApp::new().await;
    let category = app.seed_category().await;
    let unit = app.seed_unit().await;
    let other_unit = app.seed_unit().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/goods",
            Some(json!({
                "category": category.id,
                "model": "X-100",
                "unit": unit.id,
                "amount": 12,
                "good_desc": "cordless drill"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("good id");
    assert!(created["created_at"].is_string());

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/goods/{id}"),
            Some(json!({"unit": other_unit.id, "amount": 3})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["amount"], 3);
    assert_eq!(updated["unit"], other_unit.id);
    assert_eq!(updated["model"], "X-100");
    assert_eq!(updated["created_at"], created["created_at"]);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/goods?page_id=1&page_size=5&category={}", category.id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().map(Vec::len), Some(1));

    let response = app
        .request(Method::DELETE, &format!("/api/v1/goods/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn good_with_missing_category_is_a_500() {
    let app = TestApp::new().await;
    let unit = app.seed_unit().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/goods",
            Some(json!({
                "category": 31337,
                "model": "X-100",
                "unit": unit.id,
                "amount": 1,
                "good_desc": "orphan"
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Database error");
}

#[tokio::test]
async fn absent_required_integer_is_a_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/units",
            Some(json!({"unit_name": "piece"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(
            Method::POST,
            "/api/v1/units",
            Some(json!({"unit_name": "piece", "unit_value": 0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_a_live_database() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"]["status"], "up");

    let response = app.request(Method::GET, "/status", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
