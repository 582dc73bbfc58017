//! SQLite persistence layer for the activity roster.
//!
//! Owns pool construction, embedded migrations, the repository layer, and
//! first-run seeding.

pub mod models;
pub mod repositories;
pub mod seed;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use mergington_core::RosterError;

pub type DbPool = sqlx::SqlitePool;

/// Errors produced by store operations.
///
/// Domain outcomes ([`RosterError`]) stay distinct from infrastructure
/// failures: a disk or connection error is never reported as a roster
/// condition, and vice versa.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a connection pool from a database URL.
///
/// The database file is created if missing. WAL mode keeps readers from
/// blocking the single writer; foreign keys must be switched on per
/// connection in SQLite.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Cheap connectivity probe used by startup and the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
