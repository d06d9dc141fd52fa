//! Price feed provider trait definitions.

pub mod yahoo;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::FeedQuote;

/// Trait for price feed providers.
///
/// Implement this trait to add support for a new price source. The service
/// issues exactly one lookup per symbol per request; retrying or failing
/// over is the caller's decision, not the provider's.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the most recent close price for a feed symbol.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the feed has no
    /// data for the symbol (unknown ticker or empty result set).
    async fn latest_close(&self, symbol: &str) -> Result<FeedQuote, MarketDataError>;
}
