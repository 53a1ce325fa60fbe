//! StoreAdmin Kernel Library
//!
//! Route tree, permission reconciler, and the permission editor API.
//! The `storeadmin` binary serves the API and lints route tree files.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod state;

pub use config::Config;
pub use menu::{RouteDefinition, RouteTree, TreeError};
pub use permissions::{CheckState, PermissionSet, ToggleKind, derive_state, toggle};
pub use state::AppState;
