//! Schema management.
//!
//! The SQL under `migrations/` is embedded at build time and applied through
//! sqlx's migrator, which records what ran in `_sqlx_migrations`.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies every migration not yet recorded. Safe to call on each start.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "database schema up to date");
    Ok(())
}
