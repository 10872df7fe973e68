//! Payment method record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct PaymentMethod {
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    /// Fee added per order.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub fixed_fee: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_string")]
    pub gateway_password: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub gateway_user_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub gateway_user_name: Option<String>,
    /// Payment method id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    pub language_access: Option<Value>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    pub online_methods: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_status: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub payment_accept_path: Option<String>,
    /// Fee as a percentage of the order total.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub percentage_fee: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub r#type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub vat: Option<String>,
}

impl Record for PaymentMethod {
    const NAME: &'static str = "PaymentMethod";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
