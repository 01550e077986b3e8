//! Market data access for stockscope.
//!
//! This crate is the boundary to the external quote source. It defines:
//! - [`QuoteProvider`]: the trait every market data source implements
//! - [`YahooProvider`]: the Yahoo Finance implementation
//! - [`CompanyProfile`], [`PricePoint`], [`HistoryPeriod`]: the provider-side
//!   data models
//! - [`MarketDataError`]: the error type for all provider operations
//!
//! The provider view keeps every metric optional: a symbol may resolve while
//! individual fields (sector, trailing P/E, market cap, dividend yield,
//! price) are missing. Substituting defaults for missing fields is the
//! domain layer's job, not this crate's.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CompanyProfile, HistoryPeriod, PricePoint};
pub use provider::{QuoteProvider, YahooProvider};
