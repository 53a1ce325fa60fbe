//! Arena-backed route tree.
//!
//! Nodes are stored in a flat `Vec` and addressed by [`NodeId`]; each node
//! keeps its parent link so ancestor chains are a pointer walk rather than a
//! search. The tree is immutable once built.

use std::collections::HashMap;

use tracing::debug;

use super::error::TreeError;
use super::loader::RouteDefinition;

/// Handle to a node inside a [`RouteTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One entry in the route tree.
#[derive(Debug, Clone)]
pub struct RouteNode {
    label: String,
    path: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl RouteNode {
    /// Display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Navigable path, if the node is itself a page.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// A group that is also a page (e.g. a section root with a landing page).
    pub fn is_navigable_group(&self) -> bool {
        self.path.is_some() && self.has_children()
    }
}

/// Static hierarchical catalog of permissionable destinations.
#[derive(Debug, Clone)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
    roots: Vec<NodeId>,
    by_path: HashMap<String, NodeId>,
}

impl RouteTree {
    /// Build a tree from nested definitions.
    ///
    /// Fails if any node has neither path nor children, if a path is not
    /// rooted at `/`, or if a path is declared twice.
    pub fn new(definitions: Vec<RouteDefinition>) -> Result<Self, TreeError> {
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            by_path: HashMap::new(),
        };

        for definition in definitions {
            let id = tree.insert(definition, None)?;
            tree.roots.push(id);
        }

        debug!(
            nodes = tree.nodes.len(),
            paths = tree.by_path.len(),
            "built route tree"
        );
        Ok(tree)
    }

    fn insert(
        &mut self,
        definition: RouteDefinition,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        let RouteDefinition {
            label,
            path,
            children,
        } = definition;

        if path.is_none() && children.is_empty() {
            return Err(TreeError::EmptyNode { label });
        }

        let id = NodeId(self.nodes.len());

        if let Some(ref p) = path {
            if !p.starts_with('/') {
                return Err(TreeError::InvalidPath {
                    label,
                    path: p.clone(),
                });
            }
            if self.by_path.insert(p.clone(), id).is_some() {
                return Err(TreeError::DuplicatePath { path: p.clone() });
            }
        }

        self.nodes.push(RouteNode {
            label,
            path,
            parent,
            children: Vec::new(),
        });

        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            child_ids.push(self.insert(child, Some(id))?);
        }
        self.nodes[id.0].children = child_ids;

        Ok(id)
    }

    /// Top-level nodes, in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by id.
    ///
    /// Panics if `id` was obtained from a different tree.
    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Look up the node declaring `path`.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    /// Whether `path` is declared anywhere in the tree.
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Ancestor chain of `id`, ordered root first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.parent(ancestor);
        }
        chain.reverse();
        chain
    }

    /// Every path reachable from `id`: its own path first, then each child's
    /// collected paths, depth-first and left to right.
    pub fn collect_leaf_paths(&self, id: NodeId) -> Vec<&str> {
        let mut paths = Vec::new();
        self.collect_into(id, &mut paths);
        paths
    }

    fn collect_into<'a>(&'a self, id: NodeId, out: &mut Vec<&'a str>) {
        let node = self.node(id);
        if let Some(path) = node.path() {
            out.push(path);
        }
        for &child in &node.children {
            self.collect_into(child, out);
        }
    }

    /// Depth-first, pre-order traversal of every node.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Every declared path, in pre-order.
    pub fn all_paths(&self) -> Vec<&str> {
        self.walk().filter_map(|id| self.node(id).path()).collect()
    }

    /// Convert back into nested definitions (for serialization).
    pub fn to_definitions(&self) -> Vec<RouteDefinition> {
        self.roots.iter().map(|&id| self.definition_of(id)).collect()
    }

    fn definition_of(&self, id: NodeId) -> RouteDefinition {
        let node = self.node(id);
        RouteDefinition {
            label: node.label.clone(),
            path: node.path.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.definition_of(child))
                .collect(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Pre-order iterator returned by [`RouteTree::walk`].
pub struct Walk<'a> {
    tree: &'a RouteTree,
    stack: Vec<NodeId>,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
