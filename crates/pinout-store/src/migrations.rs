//! # Schema Migrations
//!
//! The SQL files under `migrations/sqlite/` are compiled into the binary and
//! applied by [`Database::open`](crate::Database::open).
//!
//! ```text
//! migrations/sqlite/
//! └── 001_key_value_store.sql   kv_store(key PRIMARY KEY, value, updated_at)
//! ```
//!
//! sqlx records applied versions in `_sqlx_migrations`; reopening an
//! up-to-date database applies nothing. Shipped files are never edited:
//! schema changes go in a new `NNN_description.sql`.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies pending migrations in version order.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    MIGRATOR.run(pool).await?;

    info!(known = MIGRATOR.migrations.len(), "Schema up to date");
    Ok(())
}
