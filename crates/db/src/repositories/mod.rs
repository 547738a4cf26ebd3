//! Repository abstractions for data access.

pub mod snapshot;

pub use snapshot::{LatestBalanceRow, RefreshError, SnapshotRepository};
