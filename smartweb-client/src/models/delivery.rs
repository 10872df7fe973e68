//! Delivery method record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A delivery method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct Delivery {
    #[serde(deserialize_with = "de::opt_string")]
    pub delivery_estimate: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub fixed_delivery: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub free_delivery_active: Option<bool>,
    /// Order total above which delivery is free.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub free_delivery_price: Option<Decimal>,
    /// Delivery method id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub multiple_addresses: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub over_limit_fee_active: Option<bool>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub over_limit_fixed_fee: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub over_limit_percentage_fee: Option<Decimal>,
    /// Base price.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub primary: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub region_mode: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub service_type: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub r#type: Option<String>,
    pub user_groups: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub vat: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub zip_from: Option<String>,
    pub zip_groups: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub zip_to: Option<String>,
}

impl Record for Delivery {
    const NAME: &'static str = "Delivery";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
