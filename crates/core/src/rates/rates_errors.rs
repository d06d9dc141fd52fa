use thiserror::Error;

/// Errors raised while computing a conversion table.
///
/// Per-currency quote misses are not errors — they are omissions. Only a
/// base the directory does not list, or a base whose USD value cannot be
/// established at all, fails the request.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The requested base code is not in the currency directory.
    #[error("Base currency '{0}' is not supported")]
    UnknownBase(String),

    /// The directory lists the base, but no USD price could be
    /// established for it through any allowed path.
    #[error("No price available for base currency '{0}'")]
    BaseUnavailable(String),
}
