//! CLI command implementations.
//!
//! These commands run without starting the server.

use std::path::Path;

use anyhow::{Context, Result};

use crate::menu::{NodeId, RouteTree};

/// Load and validate a route tree file, then print its outline.
pub fn cmd_check_tree(path: &Path) -> Result<()> {
    let tree = RouteTree::load(path)
        .with_context(|| format!("route tree {} is invalid", path.display()))?;

    for line in outline(&tree) {
        println!("{line}");
    }
    println!(
        "{}: ok ({} nodes, {} paths)",
        path.display(),
        tree.len(),
        tree.all_paths().len()
    );

    Ok(())
}

/// Indented outline of the tree, one line per node.
pub fn outline(tree: &RouteTree) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.len());
    for &root in tree.roots() {
        outline_node(tree, root, 0, &mut lines);
    }
    lines
}

fn outline_node(tree: &RouteTree, id: NodeId, depth: usize, out: &mut Vec<String>) {
    let node = tree.node(id);
    let indent = "  ".repeat(depth);
    match node.path() {
        Some(path) => out.push(format!("{indent}{} ({path})", node.label())),
        None => out.push(format!("{indent}{}", node.label())),
    }
    for &child in node.children() {
        outline_node(tree, child, depth + 1, out);
    }
}
