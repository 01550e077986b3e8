//! Yahoo Finance market data provider.
//!
//! Profiles come from the `quoteSummary` endpoint
//! (`price,summaryProfile,summaryDetail` modules), which requires the
//! cookie/crumb authentication dance. Historical series come from the
//! public v8 `chart` endpoint, which does not.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use log::{debug, warn};
use reqwest::header;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, HistoryPeriod, PricePoint};
use crate::provider::QuoteProvider;

use models::{YahooChartResponse, YahooQuoteSummaryResponse};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for the Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

/// Yahoo Finance quote provider.
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn provider_error(message: impl Into<String>) -> MarketDataError {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| Self::provider_error("Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| Self::provider_error(format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Profile Fetching
    // ========================================================================

    async fn fetch_quote_summary(
        &self,
        symbol: &str,
    ) -> Result<YahooQuoteSummaryResponse, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price,summaryProfile,summaryDetail&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Profile request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(Self::provider_error("Yahoo authentication expired"));
        }

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        response.json().await.map_err(|e| {
            Self::provider_error(format!("Failed to parse profile response: {}", e))
        })
    }

    // ========================================================================
    // History Fetching
    // ========================================================================

    async fn fetch_chart(
        &self,
        symbol: &str,
        period: HistoryPeriod,
    ) -> Result<YahooChartResponse, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d",
            encode(symbol),
            period.as_range()
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Chart request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("Failed to parse chart response: {}", e)))
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_company_profile(
        &self,
        symbol: &str,
    ) -> Result<CompanyProfile, MarketDataError> {
        debug!("Fetching quote summary for {}", symbol);

        let data = self.fetch_quote_summary(symbol).await?;

        let result = data
            .quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let mut profile = CompanyProfile::new(symbol.to_uppercase());

        if let Some(price) = result.price {
            profile.short_name = price.short_name.or(price.long_name);
            profile.price = price.regular_market_price.and_then(|p| p.raw);
        }

        if let Some(summary_profile) = result.summary_profile {
            profile.sector = summary_profile.sector;
        }

        if let Some(detail) = result.summary_detail {
            profile.trailing_pe = detail.trailing_pe.and_then(|d| d.raw);
            profile.market_cap = detail.market_cap.and_then(|d| d.raw);
            profile.dividend_yield = detail.dividend_yield.and_then(|d| d.raw);
        }

        Ok(profile)
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!("Fetching {} price history for {}", period, symbol);

        let data = self.fetch_chart(symbol, period).await?;

        if let Some(err) = data.chart.error {
            warn!("Chart error for {}: {}", symbol, err);
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let result = data
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(MarketDataError::NoDataForRange)?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let points: Vec<PricePoint> = timestamps
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close?;
                let timestamp = Utc.timestamp_opt(ts, 0).single()?;
                Some(PricePoint { timestamp, close })
            })
            .collect();

        if points.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        Ok(points)
    }
}
