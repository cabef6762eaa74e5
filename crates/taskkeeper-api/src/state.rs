//! Application state wiring the skill to its infrastructure.
//!
//! `AppState` pins the generic `TaskSkill` to the concrete SQLite store and
//! holds the loaded configuration. Everything is constructed exactly once at
//! startup and passed down explicitly -- there are no module-level globals.

use std::path::PathBuf;
use std::sync::Arc;

use taskkeeper_core::skill::TaskSkill;
use taskkeeper_infra::config::{load_skill_config, resolve_data_dir};
use taskkeeper_infra::sqlite::{DatabasePool, SqliteAttributesStore};
use taskkeeper_types::config::SkillConfig;

/// The skill pinned to the SQLite store.
pub type ConcreteTaskSkill = TaskSkill<SqliteAttributesStore>;

/// Shared application state used by both CLI commands and the HTTP endpoint.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<ConcreteTaskSkill>,
    pub config: SkillConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load config,
    /// connect to the database, wire the skill.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_skill_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join(&config.database_file).display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let skill = TaskSkill::new(SqliteAttributesStore::new(db_pool.clone()));

        Ok(Self {
            skill: Arc::new(skill),
            config,
            data_dir,
            db_pool,
        })
    }
}
