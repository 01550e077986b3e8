//! Core domain logic for StockScope.
//!
//! This crate is database-agnostic: persistence is abstracted behind the
//! [`SnapshotStore`] trait, implemented by the `stockscope-storage-sqlite`
//! crate, and market data behind the `QuoteProvider` trait from
//! `stockscope-market-data`.

pub mod constants;
pub mod detail;
pub mod errors;
pub mod portfolio;
pub mod refresh;
pub mod screener;
pub mod snapshots;

pub use detail::{DetailService, TickerDetail};
pub use errors::{DatabaseError, Error, Result, ValidationError};
pub use portfolio::{value_portfolio, Holding, PortfolioError, PortfolioValuation};
pub use refresh::{RefreshService, RefreshSummary};
pub use screener::{
    available_sectors, screen, RawScreenerCriteria, ScreenerCriteria, ScreenerReport,
};
pub use snapshots::{Snapshot, SnapshotStore};

// Re-export the market data surface consumers need alongside the core API.
pub use stockscope_market_data::{
    CompanyProfile, HistoryPeriod, MarketDataError, PricePoint, QuoteProvider, YahooProvider,
};
