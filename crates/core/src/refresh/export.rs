//! CSV export artifact written after each refresh run.

use std::path::Path;

use serde::Serialize;

use crate::errors::Result;
use crate::snapshots::Snapshot;

/// One CSV row. Columns mirror the snapshot fields; `None` serializes as
/// an empty cell.
#[derive(Serialize)]
struct ExportRow<'a> {
    symbol: &'a str,
    company: &'a str,
    sector: Option<&'a str>,
    pe_ratio: Option<f64>,
    market_cap: Option<f64>,
    dividend_yield: Option<f64>,
    price: Option<f64>,
}

impl<'a> From<&'a Snapshot> for ExportRow<'a> {
    fn from(snapshot: &'a Snapshot) -> Self {
        Self {
            symbol: &snapshot.symbol,
            company: &snapshot.company,
            sector: snapshot.sector.as_deref(),
            pe_ratio: snapshot.pe_ratio,
            market_cap: snapshot.market_cap,
            dividend_yield: snapshot.dividend_yield,
            price: snapshot.price,
        }
    }
}

/// Write the snapshot rows to `path`, overwriting any previous artifact.
pub fn export_snapshots(path: &Path, snapshots: &[Snapshot]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for snapshot in snapshots {
        writer.serialize(ExportRow::from(snapshot))?;
    }
    writer.flush()?;

    Ok(())
}
