//! Core error types for the Cambio service.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::currencies::DirectoryError;
use crate::rates::RatesError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the conversion-rate service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Currency directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Rate computation failed: {0}")]
    Rates(#[from] RatesError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert storage-specific errors (Diesel, SQLite, etc.) into
/// this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Connection pool creation failed: {0}")]
    PoolCreationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}
