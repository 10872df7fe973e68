//! Currency record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Record, de};

/// A shop currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Currency {
    /// Currency id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// ISO 4217 code.
    #[serde(deserialize_with = "de::opt_string")]
    pub iso: Option<String>,
    /// Display title.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Exchange rate against the shop currency.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub currency: Option<Decimal>,
    /// Currency symbol.
    #[serde(deserialize_with = "de::opt_string")]
    pub symbol: Option<String>,
    /// Where the symbol is placed relative to the amount.
    #[serde(deserialize_with = "de::opt_string")]
    pub symbol_place: Option<String>,
    /// Decimal separator.
    #[serde(deserialize_with = "de::opt_string")]
    pub decimal: Option<String>,
    /// Number of decimals shown.
    #[serde(deserialize_with = "de::opt_i64")]
    pub decimal_count: Option<i64>,
    /// Thousands separator.
    #[serde(deserialize_with = "de::opt_string")]
    pub point: Option<String>,
    /// Rounding mode.
    #[serde(deserialize_with = "de::opt_string")]
    pub round: Option<String>,
    /// Rounding target.
    #[serde(deserialize_with = "de::opt_string")]
    pub round_on: Option<String>,
}

impl Record for Currency {
    const NAME: &'static str = "Currency";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_currency_rate() {
        let currency = Currency::from_value(json!({"Id": 1, "Iso": "EUR", "Currency": "7.4600"})).unwrap();
        assert_eq!(currency.iso.as_deref(), Some("EUR"));
        assert_eq!(currency.currency, Some(Decimal::new(74600, 4)));
    }
}
