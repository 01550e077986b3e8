//! Snapshot domain model and storage trait.

mod model;
mod store;

pub use model::Snapshot;
pub use store::SnapshotStore;
