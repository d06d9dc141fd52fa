use std::time::Duration;

/// The common reference unit all cross-rates are computed through
pub const ANCHOR_CURRENCY: &str = "USD";

/// Decimal precision for published conversion rates
pub const RATE_DECIMAL_PRECISION: u32 = 8;

/// Maximum age of a cached currency directory snapshot
pub const DEFAULT_DIRECTORY_TTL: Duration = Duration::from_secs(300);

/// Upper bound for a single price feed lookup
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// How many per-currency quote lookups run concurrently
pub const QUOTE_FETCH_BATCH_SIZE: usize = 10;
