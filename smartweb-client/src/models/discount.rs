//! Discount records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Record, de};

/// A quantity or group discount rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Discount {
    /// Discount id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Discounted product.
    #[serde(deserialize_with = "de::opt_i64")]
    pub product_id: Option<i64>,
    /// Discounted variant, if any.
    #[serde(deserialize_with = "de::opt_i64")]
    pub variant_id: Option<i64>,
    /// Discount group the rule belongs to.
    #[serde(deserialize_with = "de::opt_i64")]
    pub discount_group_id: Option<i64>,
    /// Customer group the rule applies to.
    #[serde(deserialize_with = "de::opt_i64")]
    pub user_group_id: Option<i64>,
    /// Minimum quantity.
    #[serde(deserialize_with = "de::opt_i64")]
    pub amount: Option<i64>,
    /// Discounted price or percentage.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    /// How `price` is applied.
    #[serde(deserialize_with = "de::opt_string")]
    pub discount_type: Option<String>,
}

impl Record for Discount {
    const NAME: &'static str = "Discount";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A named group of discounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DiscountGroup {
    /// Discount group id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Group name.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Group discount.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub discount: Option<Decimal>,
}

impl Record for DiscountGroup {
    const NAME: &'static str = "DiscountGroup";

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
    fn test_discount_from_value() {
        let discount =
            Discount::from_value(json!({"Id": 1, "ProductId": "8", "Amount": "10", "Price": "5.5"})).unwrap();
        assert_eq!(discount.product_id, Some(8));
        assert_eq!(discount.amount, Some(10));
        assert_eq!(discount.price, Some(Decimal::new(55, 1)));
        assert_eq!(discount.variant_id, None);
    }
}
