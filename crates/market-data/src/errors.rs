//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a price feed.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found, or the feed returned an empty
    /// result set for it. Terminal for this request.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("ZZZ=X".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: ZZZ=X");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "internal server error".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - internal server error"
        );

        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: YAHOO");
    }
}
