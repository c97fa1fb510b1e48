//! HTTP-level integration tests for the events API.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the full
//! router (with the production middleware stack) over in-memory stores, so
//! no external services are needed.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, build_test_app_with_tickets, delete, get, post_json,
    put_json, ticket,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_ok_and_store() {
    let app = build_test_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "memory");
}

// ---------------------------------------------------------------------------
// GET /api/events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_events_empty_returns_empty_array() {
    let app = build_test_app();
    let response = get(app, "/api/events").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Events retrieved successfully");
    assert_eq!(json["data"], json!([]));
    assert!(json["searchParams"].is_object());
}

#[tokio::test]
async fn list_events_echoes_search_params_without_filtering() {
    let app = build_test_app();

    let created = post_json(app.clone(), "/api/events", json!({"name": "Conf"})).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    // Search params are validated and echoed, never applied: a non-matching
    // name filter still returns every event.
    let response = get(app, "/api/events?name=Unrelated&venue=Hall+9").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["searchParams"]["name"], "Unrelated");
    assert_eq!(json["searchParams"]["venue"], "Hall 9");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_events_rejects_overlong_search_params() {
    let app = build_test_app();
    let long = "x".repeat(201);
    let response = get(app, &format!("/api/events?name={long}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
    assert_eq!(json["errors"][0], "name must be at most 200 characters");
}

// ---------------------------------------------------------------------------
// POST /api/events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_event_returns_201_with_generated_id() {
    let app = build_test_app();
    let response = post_json(app, "/api/events", json!({"name": "Conf"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Events created successfully");
    assert_eq!(json["data"]["name"], "Conf");
    assert!(!json["data"]["eventId"].as_str().unwrap().is_empty());
    // Absent optional fields are omitted, not serialized as null.
    assert!(json["data"].get("description").is_none());
}

#[tokio::test]
async fn create_event_is_visible_in_listing() {
    let app = build_test_app();

    let created = post_json(
        app.clone(),
        "/api/events",
        json!({"name": "Conf", "venue": "Main Hall"}),
    )
    .await;
    let created_json = body_json(created).await;
    let event_id = created_json["data"]["eventId"].as_str().unwrap().to_string();

    let response = get(app, "/api/events").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["eventId"], event_id.as_str());
    assert_eq!(data[0]["venue"], "Main Hall");
}

#[tokio::test]
async fn create_event_rejects_empty_name_with_field_message() {
    let app = build_test_app();
    let response = post_json(app, "/api/events", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
    assert_eq!(json["errors"][0], "name must be between 1 and 200 characters");
}

#[tokio::test]
async fn create_event_missing_name_falls_back_to_category_message() {
    let app = build_test_app();
    let response = post_json(app, "/api/events", json!({"venue": "Hall"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
    assert_eq!(json["errors"], json!(["Invalid event create data"]));
}

// ---------------------------------------------------------------------------
// GET /api/events/{eventId}/tickets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tickets_for_event_without_tickets_is_404() {
    let app = build_test_app();
    let response = get(app, "/api/events/abc/tickets").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Tickets not found");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn tickets_for_event_with_tickets_returns_collection() {
    let app = build_test_app_with_tickets(vec![
        ticket("t1", "abc", Some("A1"), 2500),
        ticket("t2", "abc", None, 1500),
        ticket("t3", "other-event", None, 900),
    ]);

    let response = get(app, "/api/events/abc/tickets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Tickets retrieved successfully");
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["ticketId"], "t1");
    assert_eq!(data[0]["eventId"], "abc");
    assert_eq!(data[0]["seat"], "A1");
    assert_eq!(data[0]["priceCents"], 2500);
}

#[tokio::test]
async fn tickets_with_malformed_event_id_is_400() {
    let app = build_test_app();
    let response = get(app, "/api/events/bad%20id/tickets").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// DELETE /api/events/{eventId}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_204_with_empty_body_even_for_unknown_id() {
    let app = build_test_app();
    let response = delete(app, "/api/events/never-existed").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn delete_removes_the_event() {
    let app = build_test_app();

    let created = post_json(app.clone(), "/api/events", json!({"name": "Doomed"})).await;
    let created_json = body_json(created).await;
    let event_id = created_json["data"]["eventId"].as_str().unwrap().to_string();

    let response = delete(app.clone(), &format!("/api/events/{event_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listing = body_json(get(app, "/api/events").await).await;
    assert_eq!(listing["data"], json!([]));
}

#[tokio::test]
async fn delete_with_overlong_id_is_400() {
    let app = build_test_app();
    let long_id = "a".repeat(65);
    let response = delete(app, &format!("/api/events/{long_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Bad Request");
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// PUT /api/events/{eventId}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_updates_only_provided_fields() {
    let app = build_test_app();

    let created = post_json(
        app.clone(),
        "/api/events",
        json!({"name": "Conf", "description": "annual"}),
    )
    .await;
    let created_json = body_json(created).await;
    let event_id = created_json["data"]["eventId"].as_str().unwrap().to_string();

    let response = put_json(
        app,
        &format!("/api/events/{event_id}"),
        json!({"venue": "Hall B"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Events updated successfully");
    assert_eq!(json["data"]["name"], "Conf");
    assert_eq!(json["data"]["description"], "annual");
    assert_eq!(json["data"]["venue"], "Hall B");
}

#[tokio::test]
async fn put_accepts_unvalidated_body_shapes() {
    let app = build_test_app();

    let created = post_json(app.clone(), "/api/events", json!({"name": "Conf"})).await;
    let created_json = body_json(created).await;
    let event_id = created_json["data"]["eventId"].as_str().unwrap().to_string();

    // Unknown fields and an empty object both pass straight through; no
    // schema check runs on this route.
    let response = put_json(
        app,
        &format!("/api/events/{event_id}"),
        json!({"unexpected": true, "name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // The empty name was applied verbatim: this route really is unvalidated.
    assert_eq!(json["data"]["name"], "");
}

#[tokio::test]
async fn put_on_missing_event_is_404() {
    let app = build_test_app();
    let response = put_json(app, "/api/events/ghost", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Event not found");
}
