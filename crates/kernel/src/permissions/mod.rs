//! Per-user page permissions.
//!
//! A user's access is a flat [`PermissionSet`] of paths from the route tree.
//! The editor changes it only through [`toggle`], and renders it through
//! [`derive_state`]. Both are pure: they borrow the tree and set and return
//! new values.

mod reconcile;
mod set;
mod state;

pub use reconcile::{SiblingCascade, ToggleKind, toggle};
pub use set::PermissionSet;
pub use state::{CheckState, NodeState, derive_state, derive_states};
