//! VAT group record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Record, de};

/// A VAT group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VatGroup {
    /// VAT group id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Group name.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// VAT rate in percent.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub vat: Option<Decimal>,
}

impl Record for VatGroup {
    const NAME: &'static str = "VatGroup";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
