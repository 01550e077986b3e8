//! Screener predicate evaluation.

use crate::constants::SECTOR_ALL;
use crate::screener::ScreenerCriteria;
use crate::snapshots::Snapshot;

/// Filter the snapshot table by the given criteria.
///
/// Rows missing any screenable field are excluded before the predicate
/// runs; defaulted zero values are not special-cased and face the same
/// thresholds as genuine values. Remaining rows must satisfy every
/// criterion. Input order is preserved.
pub fn screen(table: &[Snapshot], criteria: &ScreenerCriteria) -> Vec<Snapshot> {
    let min_dividend_yield = criteria.min_dividend_yield_pct / 100.0;
    let min_market_cap = criteria.min_market_cap_billions * 1e9;

    table
        .iter()
        .filter(|row| row.is_screenable())
        .filter(|row| {
            // is_screenable guarantees these fields are present.
            let (Some(pe), Some(dividend_yield), Some(market_cap), Some(sector)) = (
                row.pe_ratio,
                row.dividend_yield,
                row.market_cap,
                row.sector.as_deref(),
            ) else {
                return false;
            };

            pe >= criteria.min_pe
                && pe <= criteria.max_pe
                && dividend_yield >= min_dividend_yield
                && market_cap >= min_market_cap
                && (!criteria.filters_sector() || sector == criteria.sector)
        })
        .cloned()
        .collect()
}

/// Distinct sectors present in the table, sorted, with the `"All"`
/// sentinel first. Rows without a sector are skipped.
pub fn available_sectors(table: &[Snapshot]) -> Vec<String> {
    let mut sectors: Vec<String> = table
        .iter()
        .filter_map(|row| row.sector.clone())
        .collect();
    sectors.sort();
    sectors.dedup();
    sectors.insert(0, SECTOR_ALL.to_string());
    sectors
}
