//! Checked-state derivation for rendering the permission editor.

use serde::Serialize;

use super::set::PermissionSet;
use crate::menu::{NodeId, RouteTree};

/// Checkbox state of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckState {
    pub checked: bool,
    pub partial: bool,
}

impl CheckState {
    pub const CHECKED: Self = Self {
        checked: true,
        partial: false,
    };
    pub const PARTIAL: Self = Self {
        checked: false,
        partial: true,
    };
    pub const UNCHECKED: Self = Self {
        checked: false,
        partial: false,
    };
}

/// Derive the checkbox state of `node` from `set`.
///
/// Nodes with children are checked only when every path in their subtree
/// (their own path included) is allowed, and partial when some but not all
/// are.
pub fn derive_state(tree: &RouteTree, set: &PermissionSet, node: NodeId) -> CheckState {
    let route = tree.node(node);

    if route.has_children() {
        let paths = tree.collect_leaf_paths(node);
        let checked = !paths.is_empty() && set.contains_all(paths.iter().copied());
        let partial = !checked && set.contains_any(paths.iter().copied());
        return CheckState { checked, partial };
    }

    match route.path() {
        Some(path) => CheckState {
            checked: set.contains(path),
            partial: false,
        },
        // Rejected at tree construction.
        None => CheckState::UNCHECKED,
    }
}

/// One node of the editor's render model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeState {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub state: CheckState,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeState>,
}

/// Derive the state of every node, nested like the tree.
pub fn derive_states(tree: &RouteTree, set: &PermissionSet) -> Vec<NodeState> {
    tree.roots()
        .iter()
        .map(|&id| node_state(tree, set, id))
        .collect()
}

fn node_state(tree: &RouteTree, set: &PermissionSet, id: NodeId) -> NodeState {
    let node = tree.node(id);
    NodeState {
        label: node.label().to_string(),
        path: node.path().map(str::to_string),
        state: derive_state(tree, set, id),
        children: node
            .children()
            .iter()
            .map(|&child| node_state(tree, set, child))
            .collect(),
    }
}
