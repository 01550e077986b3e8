//! Diesel row model for the snapshots table.

use diesel::prelude::*;

use stockscope_core::Snapshot;

use crate::schema::snapshots;

/// Database representation of a snapshot row.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = snapshots)]
#[diesel(primary_key(symbol))]
pub struct SnapshotDB {
    pub symbol: String,
    pub company: String,
    pub sector: Option<String>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub price: Option<f64>,
}

impl From<Snapshot> for SnapshotDB {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            symbol: snapshot.symbol,
            company: snapshot.company,
            sector: snapshot.sector,
            pe_ratio: snapshot.pe_ratio,
            market_cap: snapshot.market_cap,
            dividend_yield: snapshot.dividend_yield,
            price: snapshot.price,
        }
    }
}

impl From<SnapshotDB> for Snapshot {
    fn from(row: SnapshotDB) -> Self {
        Self {
            symbol: row.symbol,
            company: row.company,
            sector: row.sector,
            pe_ratio: row.pe_ratio,
            market_cap: row.market_cap,
            dividend_yield: row.dividend_yield,
            price: row.price,
        }
    }
}

impl From<&Snapshot> for SnapshotDB {
    fn from(snapshot: &Snapshot) -> Self {
        snapshot.clone().into()
    }
}
