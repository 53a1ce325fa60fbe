//! Route tree error types.
//!
//! Every variant names the offending label or path so a broken tree file
//! can be fixed without a debugger.

use thiserror::Error;

/// Errors raised while loading or validating a route tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Node has neither a path nor children.
    #[error("route '{label}': node has neither a path nor children")]
    EmptyNode { label: String },

    /// Path is empty or not rooted at `/`.
    #[error("route '{label}': invalid path '{path}', paths must start with '/'")]
    InvalidPath { label: String, path: String },

    /// The same path is declared by more than one node.
    #[error("path '{path}' is declared more than once")]
    DuplicatePath { path: String },

    /// Tree file extension is neither YAML nor JSON.
    #[error("unsupported route tree format '{extension}', expected .yml, .yaml or .json")]
    UnsupportedFormat { extension: String },

    #[error("failed to parse YAML route tree: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("failed to parse JSON route tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read route tree file: {0}")]
    Io(#[from] std::io::Error),
}
