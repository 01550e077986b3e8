//! Ticker detail service.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use stockscope_market_data::{HistoryPeriod, MarketDataError, PricePoint, QuoteProvider};

use crate::errors::Result;
use crate::snapshots::{Snapshot, SnapshotStore};

/// Everything a detail view needs for one ticker: the close-price series
/// for the requested period, the snapshot row, and the change between the
/// first and last closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerDetail {
    pub snapshot: Snapshot,
    pub series: Vec<PricePoint>,
    pub price_change: f64,
    pub percent_change: f64,
}

/// Assembles [`TickerDetail`] from the live provider and the store.
pub struct DetailService<S: SnapshotStore> {
    provider: Arc<dyn QuoteProvider>,
    store: Arc<S>,
}

impl<S: SnapshotStore> DetailService<S> {
    pub fn new(provider: Arc<dyn QuoteProvider>, store: Arc<S>) -> Self {
        Self { provider, store }
    }

    /// Fetch the detail data for `symbol` over `period`.
    ///
    /// The series always comes from the live provider. The snapshot comes
    /// from the store when a row exists; otherwise it is built from a live
    /// profile fetch, without being written back.
    pub async fn get_detail(&self, symbol: &str, period: HistoryPeriod) -> Result<TickerDetail> {
        let series = self.provider.get_price_history(symbol, period).await?;

        let (first, last) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => (first.close, last.close),
            _ => return Err(MarketDataError::NoDataForRange.into()),
        };

        let snapshot = match self.store.get(symbol)? {
            Some(snapshot) => snapshot,
            None => {
                debug!("No stored row for {}, fetching live profile", symbol);
                let profile = self.provider.get_company_profile(symbol).await?;
                Snapshot::from_profile(profile)
            }
        };

        let price_change = last - first;
        let percent_change = if first == 0.0 {
            0.0
        } else {
            price_change / first * 100.0
        };

        Ok(TickerDetail {
            snapshot,
            series,
            price_change,
            percent_change,
        })
    }
}
