//! Market data providers.

mod traits;
mod yahoo;

pub use traits::QuoteProvider;
pub use yahoo::YahooProvider;
