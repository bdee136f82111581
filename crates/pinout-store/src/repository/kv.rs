//! # Key-Value Repository
//!
//! SQLite implementation of [`KeyValueStore`] over the `kv_store` table.
//!
//! ## Upsert
//! ```text
//! INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
//! ON CONFLICT(key) DO UPDATE SET value = excluded.value, ...
//!
//!   first write   → row inserted
//!   later writes  → value and updated_at replaced in place
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Repository for the `kv_store` table.
///
/// ## Usage
/// ```rust,ignore
/// let kv = db.kv();
/// kv.write("favorite_boards", r#"["arduino-uno"]"#).await?;
/// let raw = kv.read("favorite_boards").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteKeyValueStore { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn read(&self, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "Reading key");

        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::read_failed(key, e))?;

        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing key");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write_failed(key, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_read_missing_key() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        assert_eq!(kv.read("favorite_boards").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_overwrite() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        kv.write("recent_boards", r#"["uno"]"#).await.unwrap();
        kv.write("recent_boards", r#"["esp32","uno"]"#).await.unwrap();

        assert_eq!(
            kv.read("recent_boards").await.unwrap().as_deref(),
            Some(r#"["esp32","uno"]"#)
        );
        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&kv.pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_closed_pool_reports_key() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();
        db.close().await;

        let err = kv.write("favorite_boards", "[]").await.unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { ref key, .. } if key == "favorite_boards"));

        let err = kv.read("favorite_boards").await.unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));
    }
}
