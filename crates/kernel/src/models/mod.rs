//! Domain models.

pub mod user;

pub use user::{SavePermissionsRequest, User, UserStore};
