//! Order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// An order with its lines, customer and payment details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct Order {
    #[serde(deserialize_with = "de::single_item")]
    pub currency: Option<OrderCurrency>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub currency_id: Option<i64>,
    /// Customer, unwrapped from its `item` wrapper.
    #[serde(deserialize_with = "de::single_item")]
    pub customer: Option<OrderCustomer>,
    #[serde(deserialize_with = "de::opt_string")]
    pub customer_comment: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub customer_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_delivered: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_due: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_sent: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    #[serde(deserialize_with = "de::single_item")]
    pub delivery: Option<OrderDelivery>,
    #[serde(deserialize_with = "de::opt_string")]
    pub delivery_comment: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub delivery_time: Option<String>,
    pub discount_codes: Option<Value>,
    /// Order id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub invoice_number: Option<String>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    /// Internal comment.
    #[serde(deserialize_with = "de::opt_string")]
    pub order_comment: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub order_comment_external: Option<String>,
    /// Order lines, always a list.
    #[serde(deserialize_with = "de::items", skip_serializing_if = "Vec::is_empty")]
    pub order_lines: Vec<OrderLine>,
    #[serde(deserialize_with = "de::opt_string")]
    pub origin: Option<String>,
    pub packing: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub packing_id: Option<i64>,
    pub payment: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub payment_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub reference_number: Option<String>,
    pub site: Option<Value>,
    /// Order status code.
    #[serde(deserialize_with = "de::opt_i64")]
    pub status: Option<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub total: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_string")]
    pub tracking_code: Option<String>,
    /// Payment transactions, always a list.
    #[serde(deserialize_with = "de::items", skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<OrderTransaction>,
    pub user: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub vat: Option<Decimal>,
}

impl Record for Order {
    const NAME: &'static str = "Order";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Order {
    /// Replaces the order comment, or appends to it on a new line when `append` is set.
    ///
    /// `None` and empty comments leave the order unchanged.
    pub fn apply_comment(&mut self, comment: Option<&str>, append: bool) {
        let Some(comment) = comment.filter(|c| !c.is_empty()) else {
            return;
        };
        self.order_comment = Some(match self.order_comment.take() {
            Some(existing) if append && !existing.is_empty() => format!("{existing}\n{comment}"),
            _ => comment.to_owned(),
        });
    }
}

/// One line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct OrderLine {
    #[serde(deserialize_with = "de::opt_string")]
    pub additional_title: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub buy_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub discount: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub discount_rounded: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub file_download_id: Option<i64>,
    /// Order line id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number_supplier: Option<String>,
    pub line_addresses: Option<Value>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub offline_product: Option<bool>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub packet_id: Option<i64>,
    pub packet_lines: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub packet_title: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price_rounded: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub product_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub product_title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub service_type: Option<String>,
    /// Line status code.
    #[serde(deserialize_with = "de::opt_i64")]
    pub status: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub stock_location_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub stock_status: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub tracking_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub variant_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub variant_title: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub vat: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub vat_rate: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub weight: Option<Decimal>,
}

impl Record for OrderLine {
    const NAME: &'static str = "OrderLine";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// The customer and delivery address of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct OrderCustomer {
    #[serde(deserialize_with = "de::opt_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country_iso: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub delivery_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub delivery_time: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub firstname: Option<String>,
    /// Customer id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub lastname: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub line_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub zip: Option<String>,
}

impl Record for OrderCustomer {
    const NAME: &'static str = "OrderCustomer";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Customer data submitted with a new order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct OrderCustomerCreate {
    #[serde(deserialize_with = "de::opt_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub address2: Option<String>,
    #[serde(rename = "B2B", deserialize_with = "de::opt_bool")]
    pub b2b: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub cvr: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub ean: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub firstname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub lastname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub mobile: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_address: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_address2: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_company: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_country_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_email: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_firstname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_lastname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_mobile: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_phone: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_state: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_zip: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub state: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub zip: Option<String>,
}

/// The currency an order was placed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderCurrency {
    /// Order currency id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Owning order.
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_id: Option<i64>,
    /// ISO 4217 code.
    #[serde(deserialize_with = "de::opt_string")]
    pub iso: Option<String>,
    /// Exchange rate at order time.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub currency: Option<Decimal>,
    /// Decimal separator.
    #[serde(deserialize_with = "de::opt_string")]
    pub decimal: Option<String>,
    /// Thousands separator.
    #[serde(deserialize_with = "de::opt_string")]
    pub point: Option<String>,
    /// Rounding mode.
    #[serde(deserialize_with = "de::opt_string")]
    pub round: Option<String>,
    /// Currency symbol.
    #[serde(deserialize_with = "de::opt_string")]
    pub symbol: Option<String>,
    /// Where the symbol is placed relative to the amount.
    #[serde(deserialize_with = "de::opt_string")]
    pub symbol_place: Option<String>,
}

impl Record for OrderCurrency {
    const NAME: &'static str = "OrderCurrency";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// The delivery chosen for an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderDelivery {
    /// Order delivery id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Delivery method.
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_id: Option<i64>,
    /// Method title at order time.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Delivery price.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    /// VAT applied to the price.
    #[serde(deserialize_with = "de::opt_string")]
    pub vat: Option<String>,
    /// Selected pickup point.
    #[serde(deserialize_with = "de::opt_string")]
    pub droppoint_id: Option<String>,
    /// Carrier tracking code.
    #[serde(deserialize_with = "de::opt_string")]
    pub tracking_code: Option<String>,
}

impl Record for OrderDelivery {
    const NAME: &'static str = "OrderDelivery";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A payment transaction registered on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct OrderTransaction {
    #[serde(deserialize_with = "de::opt_string")]
    pub action_code: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount_full: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_string")]
    pub cardtype: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub error_code: Option<String>,
    /// Transaction id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub payment_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub subscription_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub transaction_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub transaction_number_long: Option<String>,
}

impl Record for OrderTransaction {
    const NAME: &'static str = "OrderTransaction";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Transaction data submitted to register a payment on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Transaction {
    /// Order the payment belongs to.
    #[serde(deserialize_with = "de::opt_i64")]
    pub order_id: Option<i64>,
    /// Payment method.
    #[serde(deserialize_with = "de::opt_i64")]
    pub payment_id: Option<i64>,
    /// Gateway action code.
    #[serde(deserialize_with = "de::opt_string")]
    pub actioncode: Option<String>,
    /// Captured amount.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount: Option<Decimal>,
    /// Card brand.
    #[serde(deserialize_with = "de::opt_string")]
    pub cardtype: Option<String>,
    /// Currency ISO code.
    #[serde(deserialize_with = "de::opt_string")]
    pub currency: Option<String>,
    /// Transaction time.
    #[serde(deserialize_with = "de::opt_string")]
    pub date: Option<String>,
    /// Gateway error code.
    #[serde(deserialize_with = "de::opt_string")]
    pub errorcode: Option<String>,
    /// Gateway status.
    #[serde(deserialize_with = "de::opt_string")]
    pub status: Option<String>,
    /// Gateway subscription reference.
    #[serde(deserialize_with = "de::opt_string")]
    pub subscription_id: Option<String>,
    /// Gateway transaction number.
    #[serde(deserialize_with = "de::opt_string")]
    pub transaction_number: Option<String>,
    /// Long form of the transaction number.
    #[serde(deserialize_with = "de::opt_string")]
    pub transaction_number_long: Option<String>,
}
