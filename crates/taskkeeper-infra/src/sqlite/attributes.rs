//! SQLite attributes store implementation.
//!
//! Implements `AttributesStore` from `taskkeeper-core` using sqlx with split
//! read/write pools. The attributes record is stored as JSON text keyed by
//! the platform user id and deserialized on load.

use chrono::Utc;
use sqlx::Row;
use taskkeeper_core::storage::AttributesStore;
use taskkeeper_types::attributes::PersistentAttributes;
use taskkeeper_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `AttributesStore`.
pub struct SqliteAttributesStore {
    pool: DatabasePool,
}

impl SqliteAttributesStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl AttributesStore for SqliteAttributesStore {
    async fn load(
        &self,
        user_id: &str,
    ) -> Result<Option<PersistentAttributes>, RepositoryError> {
        let row = sqlx::query("SELECT attributes FROM user_attributes WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let raw: String = row
                    .try_get("attributes")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                let attributes: PersistentAttributes = serde_json::from_str(&raw)
                    .map_err(|e| RepositoryError::Query(format!("invalid attributes JSON: {e}")))?;
                Ok(Some(attributes))
            }
            None => Ok(None),
        }
    }

    async fn save(
        &self,
        user_id: &str,
        attributes: &PersistentAttributes,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let raw = serde_json::to_string(attributes)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize attributes: {e}")))?;

        sqlx::query(
            r#"INSERT INTO user_attributes (user_id, attributes, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (user_id) DO UPDATE SET attributes = excluded.attributes, updated_at = excluded.updated_at"#,
        )
        .bind(user_id)
        .bind(&raw)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> SqliteAttributesStore {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        SqliteAttributesStore::new(DatabasePool::new(&url).await.unwrap())
    }

    fn attrs(tasks: &[&str]) -> PersistentAttributes {
        PersistentAttributes {
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn save_load_roundtrip() {
        let store = test_store().await;

        store
            .save("user-1", &attrs(&["milk", "eggs"]))
            .await
            .unwrap();

        let loaded = store.load("user-1").await.unwrap();
        assert_eq!(loaded, Some(attrs(&["milk", "eggs"])));
    }

    #[tokio::test]
    async fn load_absent_user_returns_none() {
        let store = test_store().await;

        let loaded = store.load("nobody").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_upserts_existing_record() {
        let store = test_store().await;

        store.save("user-1", &attrs(&["milk"])).await.unwrap();
        store.save("user-1", &attrs(&["milk", "eggs"])).await.unwrap();

        let loaded = store.load("user-1").await.unwrap();
        assert_eq!(loaded, Some(attrs(&["milk", "eggs"])));
    }

    #[tokio::test]
    async fn save_preserves_task_order() {
        let store = test_store().await;

        store
            .save("user-1", &attrs(&["c", "a", "b"]))
            .await
            .unwrap();

        let loaded = store.load("user-1").await.unwrap().unwrap();
        assert_eq!(loaded.tasks, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = test_store().await;

        store.save("user-a", &attrs(&["milk"])).await.unwrap();
        store.save("user-b", &attrs(&["eggs"])).await.unwrap();

        assert_eq!(store.load("user-a").await.unwrap(), Some(attrs(&["milk"])));
        assert_eq!(store.load("user-b").await.unwrap(), Some(attrs(&["eggs"])));
    }

    #[tokio::test]
    async fn empty_task_list_persists() {
        let store = test_store().await;

        store.save("user-1", &attrs(&[])).await.unwrap();

        let loaded = store.load("user-1").await.unwrap();
        assert_eq!(loaded, Some(attrs(&[])));
    }
}
