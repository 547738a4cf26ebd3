//! `SeaORM` Entity for the accounts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A remote financial account, keyed by its remote-assigned id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Remote-assigned identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning institution, null when the listing carried none.
    pub institution_id: Option<String>,
    /// Display name (remote name, mask, or id).
    pub name: Option<String>,
    /// Account type, e.g. `depository`.
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    /// Account subtype, e.g. `checking`.
    pub subtype: Option<String>,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning institution.
    #[sea_orm(
        belongs_to = "super::institutions::Entity",
        from = "Column::InstitutionId",
        to = "super::institutions::Column::Id",
        on_delete = "Cascade"
    )]
    Institutions,
    /// Balance snapshots taken for this account.
    #[sea_orm(has_many = "super::balances::Entity")]
    Balances,
}

impl Related<super::institutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Institutions.def()
    }
}

impl Related<super::balances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Balances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
