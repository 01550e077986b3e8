//! Company profile model returned by providers.

use serde::{Deserialize, Serialize};

/// A snapshot of company metadata and valuation metrics as returned by a
/// provider for a single ticker symbol.
///
/// Every metric is optional: the external source may resolve a symbol yet
/// omit individual fields entirely. Consumers decide how to treat missing
/// values; this type never substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Uppercase exchange ticker, as requested.
    pub symbol: String,
    /// Company display name.
    pub short_name: Option<String>,
    /// Sector classification (e.g. "Technology").
    pub sector: Option<String>,
    /// Trailing price/earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Market capitalization in currency units.
    pub market_cap: Option<f64>,
    /// Dividend yield as a fraction (0.02 = 2%).
    pub dividend_yield: Option<f64>,
    /// Latest regular market price.
    pub price: Option<f64>,
}

impl CompanyProfile {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}
