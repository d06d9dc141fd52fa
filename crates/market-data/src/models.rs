//! Market data models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The most recent close price the feed knows for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedQuote {
    /// The feed symbol this quote answers for (e.g. `BTC-USD`, `BRL=X`)
    pub symbol: String,

    /// Closing/current price
    pub close: Decimal,

    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Source of the quote (YAHOO, ...)
    pub source: String,
}

impl FeedQuote {
    pub fn new(
        symbol: String,
        close: Decimal,
        timestamp: DateTime<Utc>,
        source: String,
    ) -> Self {
        Self {
            symbol,
            close,
            timestamp,
            source,
        }
    }
}
