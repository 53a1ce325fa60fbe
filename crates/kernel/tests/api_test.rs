#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the permission editor API.
//!
//! Requests go through the real router, including its middleware layers.

use axum::http::StatusCode;
use serde_json::{Value, json};

mod common;
use common::{TestApp, json_body};

/// Find a node in the editor's render model by path.
fn find_node<'a>(nodes: &'a Value, path: &str) -> Option<&'a Value> {
    nodes.as_array()?.iter().find_map(|node| {
        if node["path"] == path {
            Some(node)
        } else {
            find_node(&node["children"], path)
        }
    })
}

#[tokio::test]
async fn health_reports_counts() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["routes"], app.state.tree().len());
    assert_eq!(body["users"], 4);
}

#[tokio::test]
async fn tree_endpoint_returns_nested_definitions() {
    let app = TestApp::new();

    let body = json_body(app.get("/api/permissions/tree").await).await;
    let roots = body.as_array().unwrap();
    assert_eq!(roots[0]["label"], "Dashboard");

    let admin = roots.iter().find(|n| n["label"] == "Administration").unwrap();
    assert!(admin.get("path").is_none());
    assert_eq!(admin["children"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn toggle_returns_reconciled_set_and_states() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/permissions/toggle",
            &json!({"allowedPages": [], "targetPath": "/products", "group": false}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["allowedPages"], json!(["/inventory", "/products"]));

    let inventory = find_node(&body["nodes"], "/inventory").unwrap();
    assert_eq!(inventory["checked"], false);
    assert_eq!(inventory["partial"], true);

    let products = find_node(&body["nodes"], "/products").unwrap();
    assert_eq!(products["checked"], true);
}

#[tokio::test]
async fn group_toggle_selects_subtree() {
    let app = TestApp::new();

    let body = json_body(
        app.post_json(
            "/api/permissions/toggle",
            &json!({"targetPath": "/orders", "group": true}),
        )
        .await,
    )
    .await;

    assert_eq!(
        body["allowedPages"],
        json!(["/orders", "/orders/list", "/orders/returns"])
    );
    let orders = find_node(&body["nodes"], "/orders").unwrap();
    assert_eq!(orders["checked"], true);
}

#[tokio::test]
async fn toggle_unknown_path_returns_input() {
    let app = TestApp::new();

    let body = json_body(
        app.post_json(
            "/api/permissions/toggle",
            &json!({"allowedPages": ["/dashboard"], "targetPath": "/nope"}),
        )
        .await,
    )
    .await;

    assert_eq!(body["allowedPages"], json!(["/dashboard"]));
}

#[tokio::test]
async fn toggle_rejects_malformed_body() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/permissions/toggle", &json!({"group": true}))
        .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn user_permissions_include_states() {
    let app = TestApp::new();

    let response = app.get("/api/users/merchandiser/permissions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["username"], "merchandiser");
    let inventory = find_node(&body["nodes"], "/inventory").unwrap();
    assert_eq!(inventory["checked"], true);
    let orders = find_node(&body["nodes"], "/orders").unwrap();
    assert_eq!(orders["checked"], false);
    assert_eq!(orders["partial"], false);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/users/nobody/permissions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post_json(
            "/api/users/permissions",
            &json!({"username": "nobody", "allowedPages": []}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn save_permissions_persists_set() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users/permissions",
            &json!({"username": "newhire", "allowedPages": ["/orders", "/orders/list"]}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"username": "newhire", "allowedPages": ["/orders", "/orders/list"]})
    );

    let saved = app.state.users().get("newhire").unwrap();
    assert!(saved.allowed_pages.contains("/orders/list"));
}

#[tokio::test]
async fn save_rejects_unknown_pages() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users/permissions",
            &json!({"username": "newhire", "allowedPages": ["/orders", "/secret"]}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("/secret"));
    assert!(app.state.users().get("newhire").unwrap().allowed_pages.is_empty());
}
