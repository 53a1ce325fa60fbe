//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Route tree file (YAML or JSON). When None, the built-in admin tree is used.
    pub route_tree_path: Option<PathBuf>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Seed the user store with demo accounts (default: true).
    pub seed_demo_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            route_tree_path: None,
            cors_allowed_origins: vec!["*".to_string()],
            seed_demo_users: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let route_tree_path = env::var("ROUTE_TREE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let seed_demo_users = parse_bool(
            &env::var("SEED_DEMO_USERS").unwrap_or_else(|_| "true".to_string()),
        )
        .context("SEED_DEMO_USERS must be true or false")?;

        Ok(Self {
            port,
            route_tree_path,
            cors_allowed_origins,
            seed_demo_users,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}
