//! Configuration types for the Taskkeeper backend.
//!
//! Loaded from `{data_dir}/config.toml` by taskkeeper-infra; every field has
//! a default so a missing or partial file still yields a working config.

use serde::{Deserialize, Serialize};

/// Top-level skill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Database file name inside the data directory.
    pub database_file: String,
    pub server: ServerConfig,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            database_file: "taskkeeper.db".to_string(),
            server: ServerConfig::default(),
        }
    }
}

/// HTTP endpoint bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3580,
        }
    }
}
