//! Configuration loader for Taskkeeper.
//!
//! Reads `config.toml` from the data directory (`~/.taskkeeper/` in
//! production) and deserializes it into [`SkillConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use taskkeeper_types::config::SkillConfig;

/// Resolve the data directory from `TASKKEEPER_DATA_DIR`, falling back to
/// `~/.taskkeeper`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("TASKKEEPER_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".taskkeeper")
        }
    }
}

/// Load skill configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`SkillConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_skill_config(data_dir: &Path) -> SkillConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return SkillConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SkillConfig::default();
        }
    };

    match toml::from_str::<SkillConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            SkillConfig::default()
        }
    }
}
