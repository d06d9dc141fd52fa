use rust_decimal::Decimal;

/// The USD value of one unit of a currency, or a soft miss.
///
/// `usd_value: None` means the upstream feed returned no usable data for
/// this currency right now — not zero, and not an error to propagate. The
/// rate normalizer decides what a miss means (omit the entry, or fail the
/// request when the miss is on the base itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub code: String,
    pub usd_value: Option<Decimal>,
}

impl PriceQuote {
    pub fn hit(code: impl Into<String>, usd_value: Decimal) -> Self {
        Self {
            code: code.into(),
            usd_value: Some(usd_value),
        }
    }

    pub fn miss(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            usd_value: None,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.usd_value.is_none()
    }
}
