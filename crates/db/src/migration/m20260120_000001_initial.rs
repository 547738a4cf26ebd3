//! Initial database migration.
//!
//! Creates the three snapshot tables. Every statement is `IF NOT EXISTS` so
//! bootstrap can run unconditionally at startup.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(INSTITUTIONS_SQL).await?;
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(BALANCES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const INSTITUTIONS_SQL: &str = r"
CREATE TABLE IF NOT EXISTS institutions (
    id text PRIMARY KEY,
    name text
);
";

const ACCOUNTS_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id text PRIMARY KEY,
    institution_id text REFERENCES institutions(id) ON DELETE CASCADE,
    name text,
    "type" text,
    subtype text
);
"#;

const BALANCES_SQL: &str = r"
CREATE TABLE IF NOT EXISTS balances (
    id bigserial PRIMARY KEY,
    account_id text NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
    available numeric,
    ledger numeric,
    as_of timestamptz NOT NULL DEFAULT now()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS balances;
DROP TABLE IF EXISTS accounts;
DROP TABLE IF EXISTS institutions;
";
