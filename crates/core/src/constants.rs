//! Application-wide constants.

/// Identifier of the default market data source.
pub const DATA_SOURCE_YAHOO: &str = "YAHOO";

/// Placeholder stored for text fields the source could not supply.
pub const UNKNOWN_TEXT: &str = "N/A";

/// Sector filter value meaning "do not filter by sector".
pub const SECTOR_ALL: &str = "All";

/// Per-symbol timeout applied to provider calls during a refresh.
pub const DEFAULT_REFRESH_TIMEOUT_SECS: u64 = 10;

/// Symbols refreshed when no explicit watchlist is configured.
pub const DEFAULT_WATCHLIST: &[&str] = &[
    "AAPL", "MSFT", "GOOG", "AMZN", "TSLA", "JPM", "META", "NFLX", "NVDA", "INTC", "V", "BA",
    "DIS", "IBM", "PYPL", "WMT", "KO", "GS", "CRM", "AMD", "PFE", "UNH", "LNR.TO",
];
