//! The refresh job: batch fetch-and-upsert with per-symbol failure
//! isolation and a CSV export artifact.

mod export;
mod service;

pub use export::export_snapshots;
pub use service::{RefreshService, RefreshSummary};
