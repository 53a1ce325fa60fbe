#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Fixtures build real route trees and drive the real router, so tests
//! exercise the same code paths as the running server.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use storeadmin_kernel::menu::RouteDefinition;
use storeadmin_kernel::models::{User, UserStore};
use storeadmin_kernel::{AppState, Config, PermissionSet, RouteTree, routes};

/// `Inventory {/inventory: [Products /products, Promotions /promotions]}`.
pub fn inventory_tree() -> RouteTree {
    RouteTree::new(vec![RouteDefinition::section(
        "Inventory",
        "/inventory",
        vec![
            RouteDefinition::page("Products", "/products"),
            RouteDefinition::page("Promotions", "/promotions"),
        ],
    )])
    .expect("inventory tree is valid")
}

/// Build a set from string slices.
pub fn set(paths: &[&str]) -> PermissionSet {
    paths.iter().copied().collect()
}

/// A set the reconciler keeps stable under leaf toggles: every navigable
/// ancestor of an allowed path is allowed, and every allowed group has at
/// least one allowed descendant.
pub fn is_consistent(tree: &RouteTree, set: &PermissionSet) -> bool {
    tree.walk().all(|id| {
        let node = tree.node(id);
        let Some(path) = node.path() else {
            return true;
        };

        let has_descendant = node
            .children()
            .iter()
            .any(|&child| set.contains_any(tree.collect_leaf_paths(child)));

        if set.contains(path) {
            !node.has_children() || has_descendant
        } else {
            !has_descendant
        }
    })
}

/// Every subset of the tree's paths.
pub fn all_subsets(tree: &RouteTree) -> Vec<PermissionSet> {
    let paths = tree.all_paths();
    assert!(paths.len() <= 16, "tree too large for exhaustive subsets");

    (0..1u32 << paths.len())
        .map(|mask| {
            paths
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| *p)
                .collect()
        })
        .collect()
}

/// Test application: built-in tree, a known user set, real router.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let tree = RouteTree::builtin().expect("built-in tree is valid");
        let users = UserStore::with_demo_users(&tree);
        users.insert(User::new("newhire", "New Hire"));

        let state = AppState::from_parts(tree, users);
        let router = routes::build_router(state.clone(), &Config::default());
        Self { state, router }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("valid request"),
        )
        .await
    }
}

/// Read a response body as JSON.
pub async fn json_body(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
