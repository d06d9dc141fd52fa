use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use cambio_core::rates::ConversionTable;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Response body for `GET /latest/{base}`.
#[derive(Serialize)]
pub struct LatestRatesResponse {
    pub result: &'static str,
    pub base_code: String,
    pub conversion_rates: ConversionRates,
}

/// Rates as a JSON object whose keys keep directory order.
pub struct ConversionRates(Vec<(String, Decimal)>);

impl Serialize for ConversionRates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, rate) in &self.0 {
            map.serialize_entry(code, rate)?;
        }
        map.end()
    }
}

impl From<ConversionTable> for LatestRatesResponse {
    fn from(table: ConversionTable) -> Self {
        LatestRatesResponse {
            result: "success",
            base_code: table.base_code,
            conversion_rates: ConversionRates(table.rates),
        }
    }
}

/// Full conversion table for a base currency.
pub async fn get_latest_rates(
    State(state): State<Arc<AppState>>,
    Path(base): Path<String>,
) -> ApiResult<Json<LatestRatesResponse>> {
    let table = state.rate_service.compute_table(&base).await?;
    Ok(Json(table.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_response_shape_and_key_order() {
        let table = ConversionTable {
            base_code: "BRL".to_string(),
            rates: vec![
                ("BRL".to_string(), dec!(1.0)),
                ("USD".to_string(), dec!(0.18325042)),
                ("BTC".to_string(), dec!(0.00123456)),
            ],
        };

        let response: LatestRatesResponse = table.into();
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.starts_with(r#"{"result":"success","base_code":"BRL""#));
        // Keys stay in table order, values serialize as plain numbers.
        let brl = json.find(r#""BRL":1"#).unwrap();
        let usd = json.find(r#""USD":0.18325042"#).unwrap();
        let btc = json.find(r#""BTC":0.00123456"#).unwrap();
        assert!(brl < usd && usd < btc);
    }
}
