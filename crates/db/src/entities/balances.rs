//! `SeaORM` Entity for the balances table.
//!
//! Balance rows are append-only snapshots; the "current" balance of an
//! account is derived as the row with the latest `as_of`, never stored in a
//! mutable column.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A point-in-time balance snapshot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "balances")]
pub struct Model {
    /// Surrogate id.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Account this snapshot belongs to.
    pub account_id: String,
    /// Funds available for spending at snapshot time.
    pub available: Option<Decimal>,
    /// Ledger (posted) balance at snapshot time.
    pub ledger: Option<Decimal>,
    /// Snapshot timestamp, assigned by the database on insert.
    pub as_of: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Snapshotted account.
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id",
        on_delete = "Cascade"
    )]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
