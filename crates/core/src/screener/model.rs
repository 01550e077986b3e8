//! Screener criteria and report models.

use serde::{Deserialize, Serialize};

use crate::constants::SECTOR_ALL;
use crate::errors::{Error, ValidationError};
use crate::snapshots::Snapshot;

/// Screener thresholds as entered at the input boundary, before parsing.
///
/// Numeric thresholds arrive as free-form strings; [`parse`] converts them
/// without ever panicking on bad input.
///
/// [`parse`]: RawScreenerCriteria::parse
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScreenerCriteria {
    /// Sector name, or `"All"` for no sector restriction.
    pub sector: String,
    pub min_pe: String,
    pub max_pe: String,
    /// Minimum dividend yield as a percentage (0.5 = 0.5%).
    pub min_dividend_yield_pct: String,
    /// Minimum market cap in billions of currency units.
    pub min_market_cap_billions: String,
}

impl RawScreenerCriteria {
    /// Parse the string thresholds into typed criteria.
    ///
    /// Any non-numeric threshold yields a validation error; no partial
    /// criteria are produced.
    pub fn parse(&self) -> Result<ScreenerCriteria, Error> {
        Ok(ScreenerCriteria {
            sector: self.sector.clone(),
            min_pe: parse_field(&self.min_pe)?,
            max_pe: parse_field(&self.max_pe)?,
            min_dividend_yield_pct: parse_field(&self.min_dividend_yield_pct)?,
            min_market_cap_billions: parse_field(&self.min_market_cap_billions)?,
        })
    }
}

fn parse_field(value: &str) -> Result<f64, Error> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::Validation(ValidationError::NumberParse(e)))
}

/// Typed screener thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerCriteria {
    pub sector: String,
    pub min_pe: f64,
    pub max_pe: f64,
    /// Minimum dividend yield as a percentage (0.5 = 0.5%).
    pub min_dividend_yield_pct: f64,
    /// Minimum market cap in billions of currency units.
    pub min_market_cap_billions: f64,
}

impl ScreenerCriteria {
    /// Whether the sector filter restricts anything.
    pub fn filters_sector(&self) -> bool {
        self.sector != SECTOR_ALL
    }
}

/// Caller-visible screener state.
///
/// Distinguishes "never ran" from "ran and matched nothing" so the
/// presentation layer can render an initial prompt, an empty-result
/// message, or the matching rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "rows")]
pub enum ScreenerReport {
    #[default]
    NotRun,
    NoMatches,
    Matches(Vec<Snapshot>),
}

impl ScreenerReport {
    /// Fold a screen result into the two "ran" states.
    pub fn from_matches(matches: Vec<Snapshot>) -> Self {
        if matches.is_empty() {
            ScreenerReport::NoMatches
        } else {
            ScreenerReport::Matches(matches)
        }
    }
}
