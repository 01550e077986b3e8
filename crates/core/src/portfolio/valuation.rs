//! Pure portfolio valuation.

use std::collections::HashMap;

use crate::portfolio::{Holding, PortfolioError, PortfolioValuation};
use crate::snapshots::Snapshot;

/// Value `holdings` at the prices in `table`.
///
/// Fatal conditions, each failing the whole call: a held symbol missing
/// from the table, a row without a price, or a zero purchase price (the
/// return would divide by zero, and a poisoned cost basis invalidates the
/// aggregate rather than silently skipping the holding).
pub fn value_portfolio(
    holdings: &HashMap<String, Holding>,
    table: &[Snapshot],
) -> Result<PortfolioValuation, PortfolioError> {
    let prices: HashMap<&str, Option<f64>> = table
        .iter()
        .map(|row| (row.symbol.as_str(), row.price))
        .collect();

    let mut valuation = PortfolioValuation::default();

    for (symbol, holding) in holdings {
        let price = prices
            .get(symbol.as_str())
            .copied()
            .ok_or_else(|| PortfolioError::SymbolNotFound(symbol.clone()))?
            .ok_or_else(|| PortfolioError::MissingPrice(symbol.clone()))?;

        if holding.purchase_price == 0.0 {
            return Err(PortfolioError::InvalidPurchaseCost(symbol.clone()));
        }

        valuation.total_value += price * holding.quantity;
        valuation.returns.insert(
            symbol.clone(),
            (price - holding.purchase_price) / holding.purchase_price * 100.0,
        );
    }

    Ok(valuation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(symbol: &str, price: Option<f64>) -> Vec<Snapshot> {
        vec![Snapshot {
            symbol: symbol.to_string(),
            company: format!("{} Corp", symbol),
            sector: Some("Technology".to_string()),
            pe_ratio: Some(25.0),
            market_cap: Some(1.0e12),
            dividend_yield: Some(0.005),
            price,
        }]
    }

    fn holdings_of(entries: &[(&str, f64, f64)]) -> HashMap<String, Holding> {
        entries
            .iter()
            .map(|(symbol, quantity, purchase_price)| {
                (
                    symbol.to_string(),
                    Holding {
                        quantity: *quantity,
                        purchase_price: *purchase_price,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_value_and_return() {
        let table = table_with("AAPL", Some(150.0));
        let holdings = holdings_of(&[("AAPL", 10.0, 100.0)]);

        let valuation = value_portfolio(&holdings, &table).unwrap();

        assert_eq!(valuation.total_value, 1500.0);
        assert_eq!(valuation.returns["AAPL"], 50.0);
    }

    #[test]
    fn test_total_accumulates_across_holdings() {
        let mut table = table_with("AAPL", Some(150.0));
        table.extend(table_with("MSFT", Some(300.0)));
        let holdings = holdings_of(&[("AAPL", 10.0, 100.0), ("MSFT", 2.0, 400.0)]);

        let valuation = value_portfolio(&holdings, &table).unwrap();

        assert_eq!(valuation.total_value, 2100.0);
        assert_eq!(valuation.returns["MSFT"], -25.0);
    }

    #[test]
    fn test_unknown_symbol_is_fatal() {
        let table = table_with("AAPL", Some(150.0));
        let holdings = holdings_of(&[("AAPL", 10.0, 100.0), ("UNKNOWN", 1.0, 50.0)]);

        let result = value_portfolio(&holdings, &table);

        assert_eq!(
            result,
            Err(PortfolioError::SymbolNotFound("UNKNOWN".to_string()))
        );
    }

    #[test]
    fn test_missing_price_is_fatal() {
        let table = table_with("AAPL", None);
        let holdings = holdings_of(&[("AAPL", 10.0, 100.0)]);

        assert_eq!(
            value_portfolio(&holdings, &table),
            Err(PortfolioError::MissingPrice("AAPL".to_string()))
        );
    }

    #[test]
    fn test_zero_purchase_price_is_fatal() {
        let table = table_with("AAPL", Some(150.0));
        let holdings = holdings_of(&[("AAPL", 10.0, 0.0)]);

        assert_eq!(
            value_portfolio(&holdings, &table),
            Err(PortfolioError::InvalidPurchaseCost("AAPL".to_string()))
        );
    }

    #[test]
    fn test_empty_portfolio_values_to_zero() {
        let valuation = value_portfolio(&HashMap::new(), &[]).unwrap();
        assert_eq!(valuation.total_value, 0.0);
        assert!(valuation.returns.is_empty());
    }
}
