//! SQLite persistence for StockScope.
//!
//! This is the only crate that knows about Diesel. It implements the
//! `SnapshotStore` trait from `stockscope-core` on top of a pooled SQLite
//! connection with embedded migrations. Diesel errors never cross the
//! crate boundary; they are converted to the core's database-agnostic
//! error types in [`errors`].

pub mod db;
pub mod errors;
pub mod schema;
pub mod snapshots;

pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbPool};
pub use errors::StorageError;
pub use snapshots::SnapshotRepository;
