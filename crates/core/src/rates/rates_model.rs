use rust_decimal::Decimal;

/// A base-relative conversion table.
///
/// `rates` holds `(code, rate)` pairs in directory order, where the rate is
/// the value of one unit of `code` expressed in units of the base. The base
/// itself always maps to exactly 1.0. Currencies whose USD price could not
/// be established are absent — never null, never zero.
///
/// Produced fresh per request; never cached.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    pub base_code: String,
    pub rates: Vec<(String, Decimal)>,
}

impl ConversionTable {
    /// Rate for a single code, if it resolved.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| *rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
