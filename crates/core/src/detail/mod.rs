//! Ticker detail: live price series plus the stored snapshot.

mod service;

pub use service::{DetailService, TickerDetail};
