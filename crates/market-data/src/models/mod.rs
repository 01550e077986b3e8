//! Provider-side data models.

mod profile;
mod series;

pub use profile::CompanyProfile;
pub use series::{HistoryPeriod, PricePoint};
