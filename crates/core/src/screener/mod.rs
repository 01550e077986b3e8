//! Multi-criteria stock screener over the snapshot table.

mod model;
mod service;

pub use model::{RawScreenerCriteria, ScreenerCriteria, ScreenerReport};
pub use service::{available_sectors, screen};
