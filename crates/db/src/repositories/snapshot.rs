//! Snapshot repository for institution/account/balance persistence.
//!
//! Owns the two data paths of the service: the refresh transaction that
//! pulls remote state into the store, and the latest-balance read that
//! derives "current" balances from the append-only snapshot table.

use chrono::{DateTime, FixedOffset};
use perch_core::teller::{self, AccountSource, TellerError};
use perch_shared::AppError;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, EntityTrait, FromQueryResult, Set,
    Statement, TransactionTrait,
};
use tracing::info;

use crate::entities::{accounts, balances, institutions};

/// Error types for snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// Remote fetch failed; nothing from the attempt was persisted.
    #[error(transparent)]
    Source(#[from] TellerError),

    /// Database error; nothing from the attempt was persisted.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RefreshError> for AppError {
    fn from(error: RefreshError) -> Self {
        match error {
            RefreshError::Source(e) => match e {
                TellerError::NotConfigured => Self::Configuration(e.to_string()),
                other => Self::Remote(other.to_string()),
            },
            RefreshError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// One row of the latest-balances view: an account joined onto its most
/// recent snapshot, with null balance fields when no snapshot exists yet.
#[derive(Debug, Clone, FromQueryResult)]
pub struct LatestBalanceRow {
    /// Account id.
    pub account_id: String,
    /// Account display name.
    pub name: Option<String>,
    /// Account type.
    pub kind: Option<String>,
    /// Account subtype.
    pub subtype: Option<String>,
    /// Available balance from the latest snapshot.
    pub available: Option<Decimal>,
    /// Ledger balance from the latest snapshot.
    pub ledger: Option<Decimal>,
    /// Timestamp of the latest snapshot.
    pub as_of: Option<DateTime<FixedOffset>>,
}

/// Latest snapshot per account: rows are numbered within each account by
/// `as_of` descending and only the first survives the join. Accounts with no
/// snapshot keep null balance columns through the left join.
const LATEST_BALANCES_SQL: &str = r#"
WITH latest AS (
    SELECT b.*,
           ROW_NUMBER() OVER (PARTITION BY b.account_id ORDER BY b.as_of DESC) AS rn
    FROM balances b
)
SELECT a.id AS account_id, a.name, a."type" AS kind, a.subtype,
       l.available, l.ledger, l.as_of
FROM accounts a
LEFT JOIN latest l ON l.account_id = a.id AND l.rn = 1
ORDER BY a.name
"#;

/// Repository for snapshot reads and the refresh transaction.
pub struct SnapshotRepository {
    db: DatabaseConnection,
}

impl SnapshotRepository {
    /// Creates a new repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the latest balance per account, ordered by account name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn latest_balances(&self) -> Result<Vec<LatestBalanceRow>, DbErr> {
        LatestBalanceRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            LATEST_BALANCES_SQL,
        ))
        .all(&self.db)
        .await
    }

    /// Pulls current remote state and persists it in one transaction.
    ///
    /// Lists all remote accounts, then sequentially per account: fetches its
    /// balance, upserts the institution (when present) and the account, and
    /// appends one balance snapshot. Commits only after every account
    /// succeeds; any failure rolls the whole transaction back, so a refresh
    /// either persists everything or nothing.
    ///
    /// Returns the number of accounts processed.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Source`] when a remote call fails and
    /// [`RefreshError::Database`] when a write fails.
    pub async fn refresh(&self, source: &dyn AccountSource) -> Result<usize, RefreshError> {
        let remote_accounts = source.list_accounts().await?;

        // An early return drops the transaction, which rolls it back.
        let txn = self.db.begin().await?;

        for account in &remote_accounts {
            let balance = source.balances(&account.id).await?;

            if let Some(institution) = &account.institution {
                Self::upsert_institution(&txn, institution).await?;
            }
            Self::upsert_account(&txn, account).await?;
            Self::insert_snapshot(&txn, &account.id, &balance).await?;
        }

        txn.commit().await?;
        info!(accounts = remote_accounts.len(), "snapshot refresh committed");
        Ok(remote_accounts.len())
    }

    async fn upsert_institution(
        txn: &DatabaseTransaction,
        institution: &teller::Institution,
    ) -> Result<(), DbErr> {
        let model = institutions::ActiveModel {
            id: Set(institution.id.clone()),
            name: Set(institution.name.clone()),
        };
        institutions::Entity::insert(model)
            .on_conflict(
                OnConflict::column(institutions::Column::Id)
                    .update_column(institutions::Column::Name)
                    .to_owned(),
            )
            .exec(txn)
            .await?;
        Ok(())
    }

    async fn upsert_account(
        txn: &DatabaseTransaction,
        account: &teller::Account,
    ) -> Result<(), DbErr> {
        let model = accounts::ActiveModel {
            id: Set(account.id.clone()),
            institution_id: Set(account.institution.as_ref().map(|i| i.id.clone())),
            name: Set(Some(account.display_name().to_string())),
            kind: Set(account.kind.clone()),
            subtype: Set(account.subtype.clone()),
        };
        accounts::Entity::insert(model)
            .on_conflict(
                OnConflict::column(accounts::Column::Id)
                    .update_columns([
                        accounts::Column::InstitutionId,
                        accounts::Column::Name,
                        accounts::Column::Kind,
                        accounts::Column::Subtype,
                    ])
                    .to_owned(),
            )
            .exec(txn)
            .await?;
        Ok(())
    }

    async fn insert_snapshot(
        txn: &DatabaseTransaction,
        account_id: &str,
        balance: &teller::Balance,
    ) -> Result<(), DbErr> {
        // id and as_of are assigned by the database.
        let model = balances::ActiveModel {
            account_id: Set(account_id.to_string()),
            available: Set(balance.available),
            ledger: Set(balance.ledger),
            ..Default::default()
        };
        balances::Entity::insert(model).exec(txn).await?;
        Ok(())
    }
}
