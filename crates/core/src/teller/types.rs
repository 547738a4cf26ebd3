//! Wire types for the Teller API.
//!
//! Only the fields this service consumes are modeled; unknown fields are
//! ignored. Monetary amounts arrive as decimal strings and are parsed into
//! `Decimal` - never floats.

use rust_decimal::Decimal;
use serde::Deserialize;

/// An account as returned by `GET /accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Remote-assigned account id.
    pub id: String,
    /// Account display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Last digits of the account number.
    #[serde(default)]
    pub mask: Option<String>,
    /// Account type, e.g. `depository`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Account subtype, e.g. `checking`.
    #[serde(default)]
    pub subtype: Option<String>,
    /// Owning institution, when the listing carries one.
    #[serde(default)]
    pub institution: Option<Institution>,
}

impl Account {
    /// Name to persist: the remote name, falling back to the mask, falling
    /// back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.mask.as_deref())
            .unwrap_or(&self.id)
    }
}

/// The institution block nested inside an account listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Institution {
    /// Remote-assigned institution id.
    pub id: String,
    /// Institution name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A balance as returned by `GET /accounts/{id}/balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Funds available for spending, absent for some account types.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub available: Option<Decimal>,
    /// Ledger (posted) balance.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ledger: Option<Decimal>,
}
