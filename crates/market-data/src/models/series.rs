//! Historical price series models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported lookback periods for historical price requests.
///
/// Each period maps to the provider's range identifier. One week maps to
/// the provider's five-trading-day range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryPeriod {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    #[default]
    OneYear,
    FiveYears,
    Max,
}

impl HistoryPeriod {
    /// Provider range identifier for this period.
    pub fn as_range(&self) -> &'static str {
        match self {
            HistoryPeriod::OneDay => "1d",
            HistoryPeriod::OneWeek => "5d",
            HistoryPeriod::OneMonth => "1mo",
            HistoryPeriod::ThreeMonths => "3mo",
            HistoryPeriod::OneYear => "1y",
            HistoryPeriod::FiveYears => "5y",
            HistoryPeriod::Max => "max",
        }
    }
}

impl std::fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HistoryPeriod::OneDay => "1 Day",
            HistoryPeriod::OneWeek => "1 Week",
            HistoryPeriod::OneMonth => "1 Month",
            HistoryPeriod::ThreeMonths => "3 Months",
            HistoryPeriod::OneYear => "1 Year",
            HistoryPeriod::FiveYears => "5 Years",
            HistoryPeriod::Max => "Max",
        };
        write!(f, "{}", label)
    }
}

/// One point of a time-indexed close-price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}
