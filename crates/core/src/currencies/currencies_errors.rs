use thiserror::Error;

/// Errors raised by the currency directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory store could not be read on a required refresh, or
    /// returned no currencies at all. Surfaced as an infrastructure
    /// failure, never silently degraded into "no currencies supported".
    #[error("Currency directory unavailable: {0}")]
    Unavailable(String),
}
