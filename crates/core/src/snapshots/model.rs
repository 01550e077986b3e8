//! The snapshot domain model.

use serde::{Deserialize, Serialize};

use stockscope_market_data::CompanyProfile;

use crate::constants::UNKNOWN_TEXT;

/// The latest known metrics for one ticker symbol.
///
/// One row per symbol; a re-fetch replaces the row in place. Metric fields
/// are `None` only when a value never passed ingestion normalization —
/// [`Snapshot::from_profile`] substitutes `0.0` / `"N/A"` defaults for
/// fields the source omits, so refreshed rows are always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Uppercase exchange ticker, the unique key.
    pub symbol: String,
    /// Company display name, `"N/A"` when the source omits it.
    pub company: String,
    /// Sector classification, `"N/A"` when the source omits it.
    pub sector: Option<String>,
    /// Trailing price/earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Market capitalization in currency units.
    pub market_cap: Option<f64>,
    /// Dividend yield as a fraction (0.02 = 2%).
    pub dividend_yield: Option<f64>,
    /// Latest regular market price.
    pub price: Option<f64>,
}

impl Snapshot {
    /// Normalize a provider profile into a snapshot row.
    ///
    /// This is the single place defaults are substituted: text fields the
    /// source omitted become `"N/A"`, numeric fields become `0.0`.
    /// Consumers downstream never re-apply defaults.
    pub fn from_profile(profile: CompanyProfile) -> Self {
        Self {
            symbol: profile.symbol,
            company: profile
                .short_name
                .unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
            sector: Some(profile.sector.unwrap_or_else(|| UNKNOWN_TEXT.to_string())),
            pe_ratio: Some(profile.trailing_pe.unwrap_or(0.0)),
            market_cap: Some(profile.market_cap.unwrap_or(0.0)),
            dividend_yield: Some(profile.dividend_yield.unwrap_or(0.0)),
            price: Some(profile.price.unwrap_or(0.0)),
        }
    }

    /// True when every screenable field carries a value.
    ///
    /// Rows that fail this check are excluded by the screener's pre-filter
    /// before any predicate is evaluated.
    pub fn is_screenable(&self) -> bool {
        self.sector.is_some()
            && self.pe_ratio.is_some()
            && self.market_cap.is_some()
            && self.dividend_yield.is_some()
    }
}
