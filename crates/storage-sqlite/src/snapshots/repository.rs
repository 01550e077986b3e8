//! Diesel-backed implementation of the core `SnapshotStore` trait.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use stockscope_core::errors::Result;
use stockscope_core::{Snapshot, SnapshotStore};

use crate::db::{get_connection, DbPool};
use crate::errors::DieselErrorExt;
use crate::schema::snapshots;
use crate::snapshots::SnapshotDB;

/// Snapshot persistence over a pooled SQLite connection.
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotStore for SnapshotRepository {
    async fn upsert(&self, snapshot: &Snapshot) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let row = SnapshotDB::from(snapshot);

        // INSERT OR REPLACE keyed on the symbol primary key.
        diesel::replace_into(snapshots::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| e.into_core_error())?;

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = snapshots::table
            .order(snapshots::symbol.asc())
            .load::<SnapshotDB>(&mut conn)
            .map_err(|e| e.into_core_error())?;

        Ok(rows.into_iter().map(Snapshot::from).collect())
    }

    fn get(&self, symbol: &str) -> Result<Option<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let row = snapshots::table
            .find(symbol)
            .first::<SnapshotDB>(&mut conn)
            .optional()
            .map_err(|e| e.into_core_error())?;

        Ok(row.map(Snapshot::from))
    }
}
