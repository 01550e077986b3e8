//! Portfolio valuation against the snapshot table.

mod model;
mod valuation;

pub use model::{Holding, PortfolioError, PortfolioValuation};
pub use valuation::value_portfolio;
