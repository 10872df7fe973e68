//! Product records: products, variants, pictures, custom data and delivery times.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A catalog product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct Product {
    pub additionals: Option<Value>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub auto_stock: Option<bool>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub buying_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub call_for_price: Option<bool>,
    pub category: Option<Value>,
    /// Primary category.
    #[serde(deserialize_with = "de::opt_i64")]
    pub category_id: Option<i64>,
    pub custom_data: Option<Value>,
    pub category_sortings: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    pub delivery: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_id: Option<i64>,
    pub delivery_time: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_time_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description_long: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description_short: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub disable_on_empty: Option<bool>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub discount: Option<Decimal>,
    pub discount_group: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub discount_group_id: Option<i64>,
    pub discounts: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub discount_type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub ean: Option<String>,
    pub extra_buy_relations: Option<Value>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub focus_cart: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub focus_frontpage: Option<bool>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub guideline_price: Option<Decimal>,
    /// Product id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Shop-wide item number.
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number_supplier: Option<String>,
    pub language_access: Option<Value>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub min_amount: Option<i64>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub online: Option<bool>,
    pub packet_products: Option<Value>,
    pub pictures: Option<Value>,
    /// Sales price.
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    pub producer: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub producer_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub product_url: Option<String>,
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub related_product_ids: Vec<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub relation_code: Option<String>,
    pub secondary_categories: Option<Value>,
    /// Additional categories, always a list.
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub secondary_category_ids: Vec<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_canonical: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_keywords: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_link: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_title: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub status: Option<bool>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub stock: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub stock_location_id: Option<i64>,
    pub tags: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub r#type: Option<String>,
    pub unit: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub unit_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub url: Option<String>,
    pub user_access: Option<Value>,
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub user_access_ids: Vec<i64>,
    pub user_group_access: Option<Value>,
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub user_group_access_ids: Vec<i64>,
    /// Variants, always a list.
    #[serde(deserialize_with = "de::items", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    pub variant_types: Option<Value>,
    pub vat_group: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub vat_group_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub weight: Option<Decimal>,
}

impl Record for Product {
    const NAME: &'static str = "Product";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct ProductVariant {
    #[serde(deserialize_with = "de::opt_decimal")]
    pub buying_price: Option<Decimal>,
    pub delivery_time: Option<Value>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub delivery_time_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description_long: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub disable_on_empty: Option<bool>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub discount: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_string")]
    pub discount_type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub ean: Option<String>,
    /// Variant id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub item_number_supplier: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub min_amount: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub picture_id: Option<i64>,
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub picture_ids: Vec<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    /// Owning product.
    #[serde(deserialize_with = "de::opt_i64")]
    pub product_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub status: Option<bool>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub stock: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub stock_low: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    pub unit: Option<Value>,
    /// Ids of the type values describing this variant.
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub variant_type_values: Vec<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub weight: Option<Decimal>,
}

impl Record for ProductVariant {
    const NAME: &'static str = "ProductVariant";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// One value of a variant type, such as a size or a color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductVariantTypeValue {
    /// Type value id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Variant type this value belongs to.
    #[serde(deserialize_with = "de::opt_i64")]
    pub product_variant_type_id: Option<i64>,
    /// Display title.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Color code for color swatches.
    #[serde(deserialize_with = "de::opt_string")]
    pub color: Option<String>,
    /// Swatch picture file name.
    #[serde(deserialize_with = "de::opt_string")]
    pub picture: Option<String>,
    /// Sort order.
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    /// Language of the title.
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
}

impl Record for ProductVariantTypeValue {
    const NAME: &'static str = "ProductVariantTypeValue";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A product picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductPicture {
    /// Picture id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Owning product.
    #[serde(deserialize_with = "de::opt_i64")]
    pub product_id: Option<i64>,
    /// File name under the shop upload directory.
    #[serde(deserialize_with = "de::opt_string")]
    pub file_name: Option<String>,
    /// Sort order.
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    /// Alt text.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Public URL, filled in by the client from the shop id.
    #[serde(deserialize_with = "de::opt_string", skip_serializing)]
    pub file_path: Option<String>,
}

impl Record for ProductPicture {
    const NAME: &'static str = "ProductPicture";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl ProductPicture {
    /// Sets `file_path` to the picture's public URL in shop `shop_id`.
    pub fn resolve_file_path(&mut self, shop_id: i64) {
        let file_name = self.file_name.as_deref().unwrap_or_default();
        self.file_path = Some(format!("https://shop{shop_id}.hstatic.dk/upload_dir/shop/{file_name}"));
    }
}

/// A custom data value that can be attached to products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductCustomData {
    /// Custom data value id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Custom data type.
    #[serde(deserialize_with = "de::opt_i64")]
    pub type_id: Option<i64>,
    /// Value text.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Sort order.
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    /// Language of the value.
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
}

impl Record for ProductCustomData {
    const NAME: &'static str = "ProductCustomData";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A delivery time estimate shown on products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeliveryTime {
    /// Delivery time id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Display text, e.g. "2-3 days".
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Sort order.
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    /// Language of the title.
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
}

impl Record for DeliveryTime {
    const NAME: &'static str = "DeliveryTime";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
