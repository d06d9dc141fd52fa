//! SQLite storage implementation for the Cambio currency directory.
//!
//! This crate implements the storage traits defined in `cambio-core`
//! using Diesel with SQLite. Diesel-specific errors are converted to the
//! database-agnostic error types defined in core.

pub mod currencies;
pub mod db;
pub mod errors;
pub mod schema;

pub use currencies::CurrencyRepository;
pub use db::{create_pool, get_connection, init, run_migrations, DbPool};
pub use errors::StorageError;
