//! Portfolio models and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One position in a caller-supplied portfolio, keyed by symbol in the
/// caller's map. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub quantity: f64,
    pub purchase_price: f64,
}

/// Result of valuing a portfolio against current snapshot prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Sum of `price * quantity` over all holdings.
    pub total_value: f64,
    /// Per-symbol simple return in percent:
    /// `(price - purchase_price) / purchase_price * 100`.
    pub returns: std::collections::HashMap<String, f64>,
}

/// Errors that make a valuation meaningless.
///
/// All variants are fatal to the whole call: no partial total is ever
/// returned without signal.
#[derive(Error, Debug, PartialEq)]
pub enum PortfolioError {
    /// A held symbol has no row in the snapshot table.
    #[error("Symbol not found in snapshot table: {0}")]
    SymbolNotFound(String),

    /// The symbol's row exists but carries no price.
    #[error("No price available for symbol: {0}")]
    MissingPrice(String),

    /// A holding's purchase price is zero, so its return is undefined.
    #[error("Invalid purchase cost for symbol {0}: purchase price must be non-zero")]
    InvalidPurchaseCost(String),
}
