//! User model and the in-memory user store.
//!
//! The store stands in for the user-management API: it holds each user's
//! allowed pages and replaces them wholesale on save.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::menu::RouteTree;
use crate::permissions::PermissionSet;

/// User record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub display_name: String,
    pub allowed_pages: PermissionSet,
}

impl User {
    /// Create a user with no allowed pages.
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            allowed_pages: PermissionSet::new(),
        }
    }

    /// Set the allowed pages.
    pub fn with_pages(mut self, allowed_pages: PermissionSet) -> Self {
        self.allowed_pages = allowed_pages;
        self
    }
}

/// Save-permissions payload, as sent by the permission editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePermissionsRequest {
    pub username: String,
    pub allowed_pages: Vec<String>,
}

impl From<&User> for SavePermissionsRequest {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            allowed_pages: user.allowed_pages.to_vec(),
        }
    }
}

/// Concurrent in-memory user store.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<DashMap<String, User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with demo accounts.
    ///
    /// `admin` gets every path in `tree`, `merchandiser` gets the inventory
    /// section, `support` the dashboard and the order list.
    pub fn with_demo_users(tree: &RouteTree) -> Self {
        let store = Self::new();

        let everything: PermissionSet = tree.all_paths().into_iter().collect();
        store.insert(User::new("admin", "Administrator").with_pages(everything));

        let inventory: PermissionSet = tree
            .find("/inventory")
            .map(|id| tree.collect_leaf_paths(id))
            .unwrap_or_default()
            .into_iter()
            .collect();
        store.insert(User::new("merchandiser", "Merchandiser").with_pages(inventory));

        let support: PermissionSet = ["/dashboard", "/orders", "/orders/list"]
            .into_iter()
            .filter(|p| tree.contains_path(p))
            .collect();
        store.insert(User::new("support", "Support").with_pages(support));

        info!(users = store.len(), "seeded demo users");
        store
    }

    /// Insert or replace a user.
    pub fn insert(&self, user: User) {
        self.inner.insert(user.username.clone(), user);
    }

    /// Get a copy of a user by username.
    pub fn get(&self, username: &str) -> Option<User> {
        self.inner.get(username).map(|entry| entry.value().clone())
    }

    /// Replace a user's allowed pages.
    ///
    /// Returns the updated user, or `None` if the user does not exist.
    pub fn save_permissions(&self, username: &str, allowed_pages: PermissionSet) -> Option<User> {
        let mut user = self.inner.get_mut(username)?;
        user.allowed_pages = allowed_pages;
        debug!(
            username,
            pages = user.allowed_pages.len(),
            "saved user permissions"
        );
        Some(user.value().clone())
    }

    /// Usernames, sorted.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
