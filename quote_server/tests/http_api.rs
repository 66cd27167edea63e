//! End-to-end tests of the HTTP surface, driving the router in-process.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use quote_server::{QuoteStore, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(QuoteStore::seeded()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Option<String>, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn list_returns_seed_quotes_in_order() {
    let app = app();
    let (status, content_type, body) = send(&app, "GET", "/quotes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let ids: Vec<i64> = as_json(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn get_existing_quote() {
    let app = app();
    let (status, _, body) = send(&app, "GET", "/quotes/3", None).await;

    assert_eq!(status, StatusCode::OK);
    let quote = as_json(&body);
    assert_eq!(quote["id"], 3);
    assert!(quote["text"].as_str().unwrap().starts_with("Design is not just"));
    assert_eq!(quote["author"], "Steve Jobs");
}

#[tokio::test]
async fn get_unknown_or_non_numeric_id_is_not_found() {
    let app = app();
    for uri in ["/quotes/99", "/quotes/abc", "/quotes/0"] {
        let (status, content_type, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(as_json(&body), json!({"error": "Quote not found"}));
    }
}

#[tokio::test]
async fn create_assigns_next_id_and_timestamp() {
    let app = app();
    let (status, _, body) = send(
        &app,
        "POST",
        "/quotes",
        Some(r#"{"text":"X","author":"Y","category":"Z","color":"c"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert_eq!(created["id"], 6);
    assert_eq!(created["text"], "X");
    assert!(!created["addedAt"].as_str().unwrap().is_empty());

    let (status, _, body) = send(&app, "GET", "/quotes/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), created);
}

#[tokio::test]
async fn create_ignores_client_id() {
    let app = app();
    let (_, _, body) = send(&app, "POST", "/quotes", Some(r#"{"id":1,"text":"dup"}"#)).await;
    assert_eq!(as_json(&body)["id"], 6);

    let (_, _, body) = send(&app, "GET", "/quotes/1", None).await;
    assert_ne!(as_json(&body)["text"], "dup");
}

#[tokio::test]
async fn create_with_invalid_json_is_bad_request() {
    let app = app();
    let (status, content_type, body) = send(&app, "POST", "/quotes", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(as_json(&body), json!({"error": "Invalid request body"}));

    let (_, _, body) = send(&app, "GET", "/quotes", None).await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_with_array_body_is_bad_request() {
    let app = app();
    for body in ["[]", r#"[1,"t","a","c","col","x"]"#] {
        let (status, _, response) = send(&app, "POST", "/quotes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(as_json(&response), json!({"error": "Invalid request body"}));
    }

    let (_, _, body) = send(&app, "GET", "/quotes", None).await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_treats_null_fields_as_empty() {
    let app = app();
    let (status, _, body) = send(
        &app,
        "POST",
        "/quotes",
        Some(r#"{"text":"X","author":null,"category":"Z","color":"c"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert_eq!(created["text"], "X");
    assert_eq!(created["author"], "");
}

#[tokio::test]
async fn create_matches_field_names_without_case() {
    let app = app();
    let (status, _, body) = send(&app, "POST", "/quotes", Some(r#"{"Text":"X","Author":"Y"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert_eq!(created["text"], "X");
    assert_eq!(created["author"], "Y");
}

#[tokio::test]
async fn create_with_repeated_key_keeps_last_value() {
    let app = app();
    let (status, _, body) = send(&app, "POST", "/quotes", Some(r#"{"text":"a","text":"b"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&body)["text"], "b");
}

#[tokio::test]
async fn create_does_not_require_json_content_type() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/quotes")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"text":"plain"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn update_replaces_all_fields_but_id() {
    let app = app();
    let (status, _, body) = send(
        &app,
        "PUT",
        "/quotes/2",
        Some(r#"{"id":77,"text":"New","author":"Someone"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&body);
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["text"], "New");
    assert_eq!(updated["category"], "");
    assert!(updated.get("addedAt").is_none());

    let (_, _, body) = send(&app, "GET", "/quotes/2", None).await;
    assert_eq!(as_json(&body), updated);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();
    let (status, _, body) = send(&app, "PUT", "/quotes/99", Some(r#"{"text":"X"}"#)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body), json!({"error": "Quote not found"}));
}

#[tokio::test]
async fn update_checks_body_before_id() {
    let app = app();
    let (status, _, body) = send(&app, "PUT", "/quotes/99", Some("nope")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&body), json!({"error": "Invalid request body"}));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app();
    let (status, _, body) = send(&app, "DELETE", "/quotes/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _, _) = send(&app, "GET", "/quotes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&app, "DELETE", "/quotes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body), json!({"error": "Quote not found"}));
}

#[tokio::test]
async fn delete_in_the_middle_keeps_order() {
    let app = app();
    send(&app, "POST", "/quotes", Some(r#"{"text":"six"}"#)).await;
    send(&app, "DELETE", "/quotes/3", None).await;

    let (_, _, body) = send(&app, "GET", "/quotes", None).await;
    let ids: Vec<i64> = as_json(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 6]);
}
