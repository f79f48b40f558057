use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tokio::sync::Mutex;

use super::state_store::{StateStore, StoreError};

/// SQLite-backed store, one row per storage key.
///
/// The pool is initialized lazily on first use so constructing the store
/// never touches the filesystem.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Arc<Mutex<Option<SqlitePool>>>,
    path: PathBuf,
}

impl SqliteStore {
    /// Store under the OS data dir: `{data_dir}/pagecraft/onboarding.db`.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self::at_path(default_db_path()?))
    }

    /// Store at an explicit path. Tests point this at a temp directory.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(None)),
            path: path.into(),
        }
    }

    /// Get the pool, initializing schema and parent directory if necessary.
    async fn pool(&self) -> Result<SqlitePool, StoreError> {
        let mut guard = self.pool.lock().await;
        if let Some(pool) = guard.as_ref() {
            return Ok(pool.clone());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Backend(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await.map_err(|e| {
            StoreError::Backend(format!("failed to open {}: {e}", self.path.display()))
        })?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wizard_state (
                storage_key TEXT PRIMARY KEY,
                data        TEXT NOT NULL,
                saved_at    TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Backend(format!("failed to create wizard_state table: {e}")))?;

        *guard = Some(pool.clone());
        Ok(pool)
    }
}

#[async_trait]
impl StateStore for SqliteStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let pool = self.pool().await?;

        let row = sqlx::query(
            r#"
            SELECT data
            FROM wizard_state
            WHERE storage_key = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&pool)
        .await
        .map_err(|e| StoreError::Backend(format!("failed to load wizard state: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data: String = row
            .try_get("data")
            .map_err(|e| StoreError::Backend(format!("failed to read data column: {e}")))?;
        Ok(Some(data))
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let pool = self.pool().await?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO wizard_state (storage_key, data, saved_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(storage_key)
            DO UPDATE SET
                data = excluded.data,
                saved_at = excluded.saved_at
            "#,
        )
        .bind(key)
        .bind(blob)
        .bind(&now)
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Backend(format!("failed to upsert wizard state: {e}")))?;

        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        sqlx::query(
            r#"
            DELETE FROM wizard_state
            WHERE storage_key = ?1
            "#,
        )
        .bind(key)
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Backend(format!("failed to clear wizard state: {e}")))?;

        Ok(())
    }
}

/// Resolve the default database path: `{app_data_dir}/pagecraft/onboarding.db`.
fn default_db_path() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            StoreError::Backend(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                    .to_string(),
            )
        })?;

    let mut path = base;
    path.push("pagecraft");
    path.push("onboarding.db");
    Ok(path)
}
