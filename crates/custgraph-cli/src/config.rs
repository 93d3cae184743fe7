//! Configuration loading.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`CUSTGRAPH__` prefix, `__` separator)
//! 2. Config file (`custgraph.toml` by default, optional)
//! 3. Defaults

use anyhow::{Context, Result};
use serde::Deserialize;

use custgraph_graph::GraphConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub neo4j: GraphConfig,
    pub server: ServerConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Load configuration from `file_prefix` (extension optional) and the environment.
pub fn load(file_prefix: &str) -> Result<AppConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("CUSTGRAPH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("Failed to read configuration from '{file_prefix}'"))?;

    cfg.try_deserialize::<AppConfig>()
        .context("Invalid configuration")
}
