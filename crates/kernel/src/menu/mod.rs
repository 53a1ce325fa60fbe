//! Admin navigation tree.
//!
//! The route tree is the static catalog of every destination a user can be
//! granted access to. It is loaded once at startup and shared read-only:
//! - Lookup by path for the permission reconciler
//! - Ancestor and subtree traversal
//! - Nested render model for the permission editor

mod error;
mod loader;
mod tree;

pub use error::TreeError;
pub use loader::RouteDefinition;
pub use tree::{NodeId, RouteNode, RouteTree, Walk};
