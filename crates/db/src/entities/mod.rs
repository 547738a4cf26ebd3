//! `SeaORM` entity definitions.

pub mod accounts;
pub mod balances;
pub mod institutions;
