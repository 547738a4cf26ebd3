//! `SeaORM` Entity for the institutions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A financial institution, keyed by its remote-assigned id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "institutions")]
pub struct Model {
    /// Remote-assigned identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Institution name, overwritten on every upsert.
    pub name: Option<String>,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Accounts belonging to this institution.
    #[sea_orm(has_many = "super::accounts::Entity")]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
