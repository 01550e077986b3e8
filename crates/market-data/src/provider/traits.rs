//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, HistoryPeriod, PricePoint};

/// Trait for external quote sources.
///
/// Implement this trait to add support for a new market data source.
/// Implementations must be symbol-unreliable-safe: a failure for one
/// symbol carries no meaning for any other symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used in log lines and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the current company profile for a ticker symbol.
    ///
    /// Individual metric fields may be `None` when the source omits them;
    /// a missing field is not an error.
    async fn get_company_profile(&self, symbol: &str)
        -> Result<CompanyProfile, MarketDataError>;

    /// Fetch a historical close-price series for a ticker symbol.
    ///
    /// Points are ordered by timestamp ascending. Returns
    /// [`MarketDataError::NoDataForRange`] when the symbol resolves but
    /// the period holds no quotes.
    async fn get_price_history(
        &self,
        symbol: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
