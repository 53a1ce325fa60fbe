//! Permission editor API.
//!
//! The editor keeps the working set client-side: every checkbox click is
//! sent to `/api/permissions/toggle` with the current set and comes back
//! reconciled together with the derived checkbox states. Nothing is stored
//! until the editor posts the final set to `/api/users/permissions`.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::menu::RouteDefinition;
use crate::models::SavePermissionsRequest;
use crate::permissions::{self, NodeState, PermissionSet, ToggleKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    #[serde(default)]
    pub allowed_pages: PermissionSet,
    pub target_path: String,
    /// Whether the group header (rather than the row) was toggled.
    #[serde(default)]
    pub group: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsView {
    pub allowed_pages: PermissionSet,
    pub nodes: Vec<NodeState>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionsView {
    pub username: String,
    pub allowed_pages: PermissionSet,
    pub nodes: Vec<NodeState>,
}

/// GET /api/permissions/tree — The route tree.
async fn route_tree(State(state): State<AppState>) -> Json<Vec<RouteDefinition>> {
    Json(state.tree().to_definitions())
}

/// POST /api/permissions/toggle — Apply one toggle to a working set.
async fn toggle(
    State(state): State<AppState>,
    Json(body): Json<ToggleRequest>,
) -> Json<PermissionsView> {
    let tree = state.tree();
    let kind = ToggleKind::from_group_flag(body.group);
    let allowed_pages = permissions::toggle(tree, &body.allowed_pages, &body.target_path, kind);
    let nodes = permissions::derive_states(tree, &allowed_pages);

    Json(PermissionsView {
        allowed_pages,
        nodes,
    })
}

/// GET /api/users/{username}/permissions — A user's saved permissions.
async fn user_permissions(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserPermissionsView>> {
    let user = state.users().get(&username).ok_or(AppError::NotFound)?;
    let nodes = permissions::derive_states(state.tree(), &user.allowed_pages);

    Ok(Json(UserPermissionsView {
        username: user.username,
        allowed_pages: user.allowed_pages,
        nodes,
    }))
}

/// POST /api/users/permissions — Save a user's allowed pages.
async fn save_permissions(
    State(state): State<AppState>,
    Json(body): Json<SavePermissionsRequest>,
) -> AppResult<Json<SavePermissionsRequest>> {
    let unknown: Vec<&str> = body
        .allowed_pages
        .iter()
        .map(String::as_str)
        .filter(|p| !state.tree().contains_path(p))
        .collect();

    if !unknown.is_empty() {
        warn!(username = %body.username, ?unknown, "rejected unknown pages");
        return Err(AppError::BadRequest(format!(
            "unknown pages: {}",
            unknown.join(", ")
        )));
    }

    let allowed_pages: PermissionSet = body.allowed_pages.iter().map(String::as_str).collect();
    let user = state
        .users()
        .save_permissions(&body.username, allowed_pages)
        .ok_or(AppError::NotFound)?;

    info!(
        username = %user.username,
        pages = user.allowed_pages.len(),
        "user permissions saved"
    );

    Ok(Json(SavePermissionsRequest::from(&user)))
}

/// Create the permission editor router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/permissions/tree", get(route_tree))
        .route("/api/permissions/toggle", post(toggle))
        .route("/api/users/{username}/permissions", get(user_permissions))
        .route("/api/users/permissions", post(save_permissions))
}
