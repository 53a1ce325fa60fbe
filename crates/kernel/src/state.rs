//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::menu::RouteTree;
use crate::models::UserStore;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Route tree, fixed for the process lifetime.
    tree: RouteTree,

    /// Users and their allowed pages.
    users: UserStore,
}

impl AppState {
    /// Build state from configuration: load the route tree and seed users.
    pub fn new(config: &Config) -> Result<Self> {
        let tree = match &config.route_tree_path {
            Some(path) => RouteTree::load(path)
                .with_context(|| format!("failed to load route tree from {}", path.display()))?,
            None => RouteTree::builtin().context("built-in route tree is invalid")?,
        };

        let users = if config.seed_demo_users {
            UserStore::with_demo_users(&tree)
        } else {
            UserStore::new()
        };

        info!(
            nodes = tree.len(),
            users = users.len(),
            "application state initialized"
        );

        Ok(Self::from_parts(tree, users))
    }

    /// Build state from an already loaded tree and store.
    pub fn from_parts(tree: RouteTree, users: UserStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { tree, users }),
        }
    }

    /// Get the route tree.
    pub fn tree(&self) -> &RouteTree {
        &self.inner.tree
    }

    /// Get the user store.
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }
}
