//! Toggle reconciliation for the permission editor.
//!
//! Applies one checkbox interaction to a [`PermissionSet`] and returns the
//! resulting set. Unchecking always clears the node's whole subtree;
//! checking a row pulls in the navigable ancestors so the parent chain stays
//! reachable. Group toggles select whole subtrees, and inside a pathless
//! section they select or clear the entire section.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::set::PermissionSet;
use crate::menu::{NodeId, RouteTree};

/// Which affordance of a node was interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKind {
    /// The node's own row.
    Leaf,
    /// A group header that cascades to the node's subtree.
    Group,
}

impl ToggleKind {
    /// Map the editor's `group` flag.
    pub fn from_group_flag(is_group: bool) -> Self {
        if is_group { Self::Group } else { Self::Leaf }
    }
}

/// Section-wide cascade applied on top of a toggle.
///
/// A group toggle on a node whose parent has no path of its own (a pure
/// grouping node) selects or clears every path of that parent together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingCascade {
    None,
    Section(NodeId),
}

impl SiblingCascade {
    /// Decide the cascade for a toggle of `node`.
    pub fn resolve(tree: &RouteTree, node: NodeId, kind: ToggleKind) -> Self {
        if kind != ToggleKind::Group {
            return Self::None;
        }

        match tree.parent(node) {
            Some(parent) if tree.node(parent).path().is_none() => Self::Section(parent),
            _ => Self::None,
        }
    }

    /// Paths covered by the cascade.
    pub fn paths<'a>(&self, tree: &'a RouteTree) -> Vec<&'a str> {
        match *self {
            Self::None => Vec::new(),
            Self::Section(section) => tree.collect_leaf_paths(section),
        }
    }
}

/// Apply a toggle of `target_path` to `current`, returning the new set.
///
/// An unknown `target_path` leaves the set unchanged.
pub fn toggle(
    tree: &RouteTree,
    current: &PermissionSet,
    target_path: &str,
    kind: ToggleKind,
) -> PermissionSet {
    let Some(target) = tree.find(target_path) else {
        debug!(target_path, "toggle target not in route tree, ignoring");
        return current.clone();
    };

    let cascade = SiblingCascade::resolve(tree, target, kind);
    let mut next = current.clone();

    if current.contains(target_path) {
        // Removal clears the full subtree whatever the kind.
        for path in tree.collect_leaf_paths(target) {
            next.remove(path);
        }
        for path in cascade.paths(tree) {
            next.remove(path);
        }
        release_ancestors(tree, target, &mut next);
    } else {
        if kind == ToggleKind::Group && tree.node(target).is_navigable_group() {
            for path in tree.collect_leaf_paths(target) {
                next.insert(path);
            }
        } else {
            next.insert(target_path);
            for ancestor in tree.ancestors(target) {
                if let Some(path) = tree.node(ancestor).path() {
                    next.insert(path);
                }
            }
        }
        for path in cascade.paths(tree) {
            next.insert(path);
        }
    }

    trace!(
        target_path,
        ?kind,
        ?cascade,
        before = current.len(),
        after = next.len(),
        "reconciled toggle"
    );
    next
}

/// Drop navigable ancestors of `node` that no longer have any allowed
/// descendant.
fn release_ancestors(tree: &RouteTree, node: NodeId, set: &mut PermissionSet) {
    for ancestor in tree.ancestors(node).into_iter().rev() {
        let Some(path) = tree.node(ancestor).path() else {
            continue;
        };
        let in_use = tree
            .children(ancestor)
            .iter()
            .any(|&child| set.contains_any(tree.collect_leaf_paths(child)));
        if !in_use {
            set.remove(path);
        }
    }
}
