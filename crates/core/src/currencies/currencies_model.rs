use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset class of a listed currency.
///
/// Determines how the price feed ticker for the currency is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Fiat,
    Crypto,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Fiat => "FIAT",
            AssetClass::Crypto => "CRYPTO",
        }
    }

    /// Parse the TEXT representation used by the directory store.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "FIAT" => Some(AssetClass::Fiat),
            "CRYPTO" => Some(AssetClass::Crypto),
            _ => None,
        }
    }
}

/// A currency listed in the directory.
///
/// Immutable once loaded; owned by the directory cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    /// Unique uppercase currency code, e.g. "BRL"
    pub code: String,
    /// Fiat or crypto
    pub asset_class: AssetClass,
}

/// The full set of listed currencies at a point in time.
///
/// Codes are unique within a snapshot; descriptor order is the directory's
/// stable order and is preserved all the way into the conversion table.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    pub currencies: Vec<CurrencyDescriptor>,
    pub captured_at: DateTime<Utc>,
}

impl DirectorySnapshot {
    pub fn new(currencies: Vec<CurrencyDescriptor>) -> Self {
        Self {
            currencies,
            captured_at: Utc::now(),
        }
    }

    pub fn find(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.currencies.iter().find(|c| c.code == code)
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_db_round_trip() {
        assert_eq!(AssetClass::from_db_str("FIAT"), Some(AssetClass::Fiat));
        assert_eq!(AssetClass::from_db_str("CRYPTO"), Some(AssetClass::Crypto));
        assert_eq!(AssetClass::from_db_str("EQUITY"), None);
        assert_eq!(AssetClass::Fiat.as_str(), "FIAT");
        assert_eq!(AssetClass::Crypto.as_str(), "CRYPTO");
    }

    #[test]
    fn test_snapshot_find() {
        let snapshot = DirectorySnapshot::new(vec![
            CurrencyDescriptor {
                code: "USD".to_string(),
                asset_class: AssetClass::Fiat,
            },
            CurrencyDescriptor {
                code: "BTC".to_string(),
                asset_class: AssetClass::Crypto,
            },
        ]);

        assert_eq!(snapshot.find("BTC").map(|c| c.asset_class), Some(AssetClass::Crypto));
        assert!(snapshot.find("ZZZ").is_none());
        assert_eq!(snapshot.len(), 2);
    }
}
