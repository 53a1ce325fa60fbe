//! Route tree definitions and loading.
//!
//! Trees are authored as nested `{label, path?, children?}` entries in YAML
//! or JSON. The admin dashboard tree ships embedded in the binary; a file
//! given via `ROUTE_TREE_PATH` replaces it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::TreeError;
use super::tree::RouteTree;

/// Built-in admin dashboard tree.
const BUILTIN_TREE: &str = include_str!("../../config/admin_routes.yml");

/// One authored entry of a route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Display name
    pub label: String,
    /// Navigable path (e.g. "/orders"); absent for pure grouping nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Nested entries, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    /// A navigable page with no children.
    pub fn page(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// A pure grouping node with no landing page.
    pub fn group(label: impl Into<String>, children: Vec<RouteDefinition>) -> Self {
        Self {
            label: label.into(),
            path: None,
            children,
        }
    }

    /// A group that is also a page.
    pub fn section(
        label: impl Into<String>,
        path: impl Into<String>,
        children: Vec<RouteDefinition>,
    ) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            children,
        }
    }
}

impl RouteTree {
    /// Parse and validate a YAML tree.
    pub fn from_yaml(source: &str) -> Result<Self, TreeError> {
        let definitions: Vec<RouteDefinition> = serde_yml::from_str(source)?;
        Self::new(definitions)
    }

    /// Parse and validate a JSON tree.
    pub fn from_json(source: &str) -> Result<Self, TreeError> {
        let definitions: Vec<RouteDefinition> = serde_json::from_str(source)?;
        Self::new(definitions)
    }

    /// Load a tree file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let parse: fn(&str) -> Result<Self, TreeError> = match extension.as_str() {
            "yml" | "yaml" => Self::from_yaml,
            "json" => Self::from_json,
            _ => return Err(TreeError::UnsupportedFormat { extension }),
        };

        let source = std::fs::read_to_string(path)?;
        let tree = parse(&source)?;

        info!(path = %path.display(), nodes = tree.len(), "loaded route tree");
        Ok(tree)
    }

    /// The admin dashboard tree embedded in the binary.
    pub fn builtin() -> Result<Self, TreeError> {
        Self::from_yaml(BUILTIN_TREE)
    }
}
