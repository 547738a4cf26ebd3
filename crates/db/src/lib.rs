//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the three snapshot tables
//! - The snapshot repository (refresh transaction and latest-balance reads)
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::SnapshotRepository;

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Brings the schema up to date, creating the three tables when absent.
///
/// Runs inside sea-orm-migration's own transaction per migration; a failed
/// statement rolls the whole migration back and propagates. Re-running on an
/// initialized database is a no-op.
///
/// # Errors
///
/// Returns an error if a migration fails; callers treat this as fatal at
/// startup.
pub async fn bootstrap(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await
}
