/// API integration tests
/// Tests complete HTTP request/response cycles against the real router
mod common;

use atlas_core::types::{UserFields, UserId};
use atlas_core::{Geocoder, UserRepository};
use atlas_server::{create_router, AppState};
use axum::http::StatusCode;
use common::{body_json, fixtures, json_request, CountingGeocoder, TestApp, UnreachableRepository};
use std::sync::Arc;
use serde_json::json;
use tower::util::ServiceExt;

async fn seed_user(app: &TestApp) -> atlas_core::User {
    app.repository
        .create(UserFields {
            name: Some("Test User".to_string()),
            dob: Some("08/27/2018".to_string()),
            address: Some("Los Angeles".to_string()),
            description: Some("This is a test".to_string()),
        })
        .await
        .unwrap()
}

// =============================================================================
// GET
// =============================================================================

/// Test GET /api/users on an empty store
#[tokio::test]
async fn test_list_users_empty() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request("GET", "/api/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

/// Test GET /api/users returns records in insertion order
#[tokio::test]
async fn test_list_users_in_insertion_order() {
    let app = TestApp::new();
    let first = seed_user(&app).await;
    let second = seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request("GET", "/api/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id.to_string(), second.id.to_string()]);
}

/// Test GET /api/users/:id returns the full stored record
#[tokio::test]
async fn test_get_single_user() {
    let app = TestApp::new();
    let user = seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request("GET", &format!("/api/users/{}", user.id), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::to_value(&user).unwrap());
}

/// Test GET /api/users/:id with a malformed id
#[tokio::test]
async fn test_get_user_malformed_id() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request("GET", "/api/users/1234567890", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Could not find User" })
    );
}

/// Test GET /api/users/:id with a well-formed id that was never stored
#[tokio::test]
async fn test_get_user_unknown_id() {
    let app = TestApp::new();
    seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request(
            "GET",
            &format!("/api/users/{}", UserId::generate()),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Could not find User" })
    );
}

// =============================================================================
// POST
// =============================================================================

/// Test POST /api/users with every field supplied
#[tokio::test]
async fn test_create_user_all_fields() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request("POST", "/api/users", Some(fixtures::full_user())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": body["id"],
            "name": "Test User",
            "dob": "08/27/2018",
            "address": "Los Angeles",
            "description": "This is a test",
            "createdAt": body["createdAt"],
            "updatedAt": body["updatedAt"],
            "version": 0
        })
    );
    assert!(body["id"].as_str().unwrap().parse::<UserId>().is_ok());
    assert_eq!(app.repository.len().await, 1);
}

/// Test POST /api/users with a missing field leaves it absent
#[tokio::test]
async fn test_create_user_missing_fields() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "Test User",
                "dob": "08/27/2018",
                "address": "Los Angeles"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": body["id"],
            "name": "Test User",
            "dob": "08/27/2018",
            "address": "Los Angeles",
            "createdAt": body["createdAt"],
            "updatedAt": body["updatedAt"],
            "version": 0
        })
    );
    assert!(body.get("description").is_none());
}

/// Test POST /api/users with an empty object is accepted
#[tokio::test]
async fn test_create_user_no_fields() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request("POST", "/api/users", Some(json!({}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    for key in ["id", "createdAt", "updatedAt", "version"] {
        assert!(body.get(key).is_some(), "missing {key}");
    }
}

/// Test POST /api/users with a body that is not JSON
#[tokio::test]
async fn test_create_user_malformed_body() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
    assert!(app.repository.is_empty().await);
}

// =============================================================================
// PUT / PATCH
// =============================================================================

/// Test PUT /api/users/:id with every field supplied
#[tokio::test]
async fn test_update_user_all_fields() {
    let app = TestApp::new();
    let user = seed_user(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", user.id),
            Some(json!({
                "name": "Updated User",
                "dob": "01/01/2000",
                "address": "Hacienda Heights",
                "description": "This is an update"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["nModified"], 1);

    let stored = app.repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.fields.name.as_deref(), Some("Updated User"));
    assert_eq!(stored.fields.address.as_deref(), Some("Hacienda Heights"));
    assert_eq!(stored.version, 1);
}

/// Test PUT /api/users/ without an id never reaches a handler
#[tokio::test]
async fn test_update_without_id_is_not_found() {
    let app = TestApp::new();
    let user = seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request(
            "PUT",
            "/api/users/",
            Some(json!({ "name": "Updated Name", "description": "This is an update" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = app.repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored, user);
}

/// Test PATCH /api/users/:id with some fields missing
#[tokio::test]
async fn test_patch_user_partial_fields() {
    let app = TestApp::new();
    let user = seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request(
            "PATCH",
            &format!("/api/users/{}", user.id),
            Some(json!({ "name": "Updated Name", "description": "This is an update" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "n": 1, "nModified": 1, "ok": 1 })
    );

    let stored = app.repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.fields.name.as_deref(), Some("Updated Name"));
    assert_eq!(stored.fields.description.as_deref(), Some("This is an update"));
    assert_eq!(stored.fields.dob, user.fields.dob);
    assert_eq!(stored.fields.address, user.fields.address);
    assert_eq!(stored.created_at, user.created_at);
    assert!(stored.updated_at > user.updated_at);
}

/// Test PATCH /api/users/:id for an id that matches nothing
#[tokio::test]
async fn test_patch_unknown_user() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request(
            "PATCH",
            "/api/users/1234567890",
            Some(json!({ "name": "Nobody" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "n": 0, "nModified": 0, "ok": 1 })
    );
    assert!(app.repository.is_empty().await);
}

// =============================================================================
// DELETE
// =============================================================================

/// Test DELETE /api/users/:id then deleting again
#[tokio::test]
async fn test_delete_user_twice() {
    let app = TestApp::new();
    let user = seed_user(&app).await;
    let uri = format!("/api/users/{}", user.id);

    let response = app
        .router
        .clone()
        .oneshot(json_request("DELETE", &uri, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["n"], 1);
    assert!(app.repository.is_empty().await);

    let response = app
        .router
        .oneshot(json_request("DELETE", &uri, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Could not delete User" })
    );
}

/// Test DELETE /api/users/:id with a malformed id
#[tokio::test]
async fn test_delete_user_malformed_id() {
    let app = TestApp::new();
    seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request("DELETE", "/api/users/1234567890", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Could not delete User" })
    );
    assert_eq!(app.repository.len().await, 1);
}

// =============================================================================
// Misc
// =============================================================================

/// Test GET /api/health reports the stored record count
#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    seed_user(&app).await;

    let response = app
        .router
        .oneshot(json_request("GET", "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 1);
    assert!(body["version"].is_string());
}

/// Test GET /api/health when the store does not answer
#[tokio::test]
async fn test_health_store_unreachable() {
    let state = AppState::new(
        Arc::new(UnreachableRepository) as Arc<dyn UserRepository>,
        Arc::new(CountingGeocoder::failing()) as Arc<dyn Geocoder>,
    );

    let response = create_router(state)
        .oneshot(json_request("GET", "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "unavailable");
    assert!(body.get("users").is_none());
}

/// Test unknown routes
#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(json_request("GET", "/api/widgets", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
