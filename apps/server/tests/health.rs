mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_router, send};
use serde_json::json;

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp) = build_test_router().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn requests_without_identity_are_rejected() {
    let (app, _tmp) = build_test_router().await;
    for uri in ["/api/v1/schedule", "/api/v1/finance/daily-limit", "/api/v1/health"] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["code"], 401);
    }
    let (status, _) = send(&app, Method::GET, "/api/v1/schedule", Some("  "), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_record_tracks_water_meals_and_skincare() {
    let (app, _tmp) = build_test_router().await;
    let user = Some("student-1");

    let (status, record) = send(&app, Method::GET, "/api/v1/health", user, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["waterIntake"], json!([]));
    assert_eq!(record["skincareRoutine"]["sunscreen"], false);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/health/water",
        user,
        Some(json!({ "amount": 0.75 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, record) = send(
        &app,
        Method::POST,
        "/api/v1/health/meal",
        user,
        Some(json!({ "mealType": "Lunch", "foods": [{ "name": "Gado-gado" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["waterIntake"][0]["amount"], 0.75);
    assert_eq!(record["mealLogs"][0]["foods"][0]["isAcneSafe"], true);

    let (_, record) = send(
        &app,
        Method::POST,
        "/api/v1/health/skincare",
        user,
        Some(json!({ "sunscreen": true })),
    )
    .await;
    assert_eq!(record["skincareRoutine"]["sunscreen"], true);
    assert_eq!(record["skincareRoutine"]["faceWash"], false);
}

#[tokio::test]
async fn invalid_health_inputs_are_bad_requests() {
    let (app, _tmp) = build_test_router().await;
    let user = Some("student-1");

    let cases = [
        ("/api/v1/health/water", json!({ "amount": -1 })),
        ("/api/v1/health/meal", json!({ "mealType": "Dinner", "foods": [] })),
        ("/api/v1/health/acne", json!({ "status": "Terrible" })),
    ];
    for (uri, body) in cases {
        let (status, _) = send(&app, Method::POST, uri, user, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn recommendations_are_static() {
    let (app, _tmp) = build_test_router().await;
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/health/recommendations",
        Some("student-1"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 6);
    assert_eq!(recs[0]["name"], "Gado-gado");
    assert_eq!(recs[5]["benefits"], "Complex carbs, sustained energy");
}
