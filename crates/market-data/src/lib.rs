//! Cambio Market Data Crate
//!
//! Provider-agnostic access to the external price feed. The rest of the
//! application talks to the [`PriceProvider`] trait and never sees the
//! concrete upstream.
//!
//! The feed answers one question: "what is the most recent close price for
//! this ticker symbol?" Symbols follow the feed's own conventions
//! (`BTC-USD` for crypto pairs, `BRL=X` for fiat priced in USD); building
//! them is the caller's concern.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::FeedQuote;
pub use provider::yahoo::YahooProvider;
pub use provider::PriceProvider;
