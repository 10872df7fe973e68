//! Domain records.
//!
//! One struct per remote entity, with every field the remote schema defines. Field names are
//! snake_case in Rust and PascalCase on the wire. Decoding copies each known field, ignores
//! fields the record does not define, leaves absent fields unset, and fails on a field whose
//! value has the wrong kind.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use smartweb_client::models::{Product, Record};
//!
//! let product = Product::from_value(json!({"Id": "42", "Title": "Widget"})).unwrap();
//! assert_eq!(product.id(), Some(42));
//! assert_eq!(product.title.as_deref(), Some("Widget"));
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{Result, SmartwebError};

mod category;
mod currency;
pub(crate) mod de;
mod delivery;
mod discount;
mod order;
mod page_text;
mod payment;
mod product;
mod site;
mod user;
mod vat;

pub use category::Category;
pub use currency::Currency;
pub use delivery::Delivery;
pub use discount::{Discount, DiscountGroup};
pub use order::{
    Order, OrderCurrency, OrderCustomer, OrderCustomerCreate, OrderDelivery, OrderLine,
    OrderTransaction, Transaction,
};
pub use page_text::PageText;
pub use payment::PaymentMethod;
pub use product::{
    DeliveryTime, Product, ProductCustomData, ProductPicture, ProductVariant,
    ProductVariantTypeValue,
};
pub use site::{SeoRedirect, Site};
pub use user::{User, UserGroup};
pub use vat::VatGroup;

/// A remote entity with a numeric id.
pub trait Record: Serialize + DeserializeOwned {
    /// Entity name, used in error messages.
    const NAME: &'static str;

    /// Remote id, if the record has one.
    fn id(&self) -> Option<i64>;

    /// Decodes a record from a reply value.
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::MalformedResponse` if a known field has a value of the wrong kind.
    fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| SmartwebError::MalformedResponse(format!("{}: {e}", Self::NAME)))
    }

    /// Returns the id, failing when the record has none.
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::InvalidInput` if `id` is unset.
    fn require_id(&self) -> Result<i64> {
        self.id()
            .ok_or_else(|| SmartwebError::InvalidInput(format!("{} has no Id", Self::NAME)))
    }
}
