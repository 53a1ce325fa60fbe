//! Per-user set of allowed page paths.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Pages a user may access.
///
/// Ordered so serialized output is deterministic; membership is all that
/// matters. Only the reconciler and constructors can change a set, callers
/// replace their copy with the one the reconciler returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    paths: BTreeSet<String>,
}

impl PermissionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Whether at least one of `paths` is allowed.
    pub fn contains_any<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> bool {
        paths.into_iter().any(|p| self.contains(p))
    }

    /// Whether every one of `paths` is allowed.
    pub fn contains_all<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> bool {
        paths.into_iter().all(|p| self.contains(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths as an owned list (the `allowedPages` wire shape).
    pub fn to_vec(&self) -> Vec<String> {
        self.paths.iter().cloned().collect()
    }

    pub(crate) fn insert(&mut self, path: &str) {
        if !self.paths.contains(path) {
            self.paths.insert(path.to_string());
        }
    }

    pub(crate) fn remove(&mut self, path: &str) {
        self.paths.remove(path);
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
