//! Storage trait for snapshot persistence.

use async_trait::async_trait;

use crate::errors::Result;
use crate::snapshots::Snapshot;

/// Persistence boundary for snapshot rows.
///
/// Implementations key rows by symbol: writing a symbol that already exists
/// replaces its row, never duplicates it.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Insert or replace the row for `snapshot.symbol`.
    async fn upsert(&self, snapshot: &Snapshot) -> Result<()>;

    /// Read every stored row, ordered by symbol.
    fn read_all(&self) -> Result<Vec<Snapshot>>;

    /// Look up a single row by symbol.
    fn get(&self, symbol: &str) -> Result<Option<Snapshot>>;
}
