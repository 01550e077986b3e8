//! Serde models for the Yahoo Finance JSON responses.

use serde::Deserialize;

// ============================================================================
// quoteSummary response
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Vec<YahooQuoteSummaryResult>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_profile: Option<YahooSummaryProfile>,
    pub summary_detail: Option<YahooSummaryDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<YahooFmtValue>,
}

#[derive(Debug, Deserialize)]
pub struct YahooSummaryProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<YahooFmtValue>,
    pub market_cap: Option<YahooFmtValue>,
    pub dividend_yield: Option<YahooFmtValue>,
}

/// Yahoo wraps numeric fields as `{"raw": 123.4, "fmt": "123.40"}`.
/// Fields Yahoo has no value for arrive as an empty object `{}`.
#[derive(Debug, Deserialize)]
pub struct YahooFmtValue {
    #[serde(default)]
    pub raw: Option<f64>,
    #[serde(default)]
    pub fmt: Option<String>,
}

// ============================================================================
// v8 chart response
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooIndicatorQuote>,
}

/// Close prices aligned with the result's timestamps. Halted or missing
/// sessions arrive as `null` entries.
#[derive(Debug, Deserialize)]
pub struct YahooIndicatorQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
