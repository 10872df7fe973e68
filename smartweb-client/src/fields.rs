//! Response field restriction.
//!
//! The remote service lets a session restrict which fields it returns for an entity type. The
//! restriction stays in effect for later calls in the same session.

use std::{fmt, str::FromStr};

use crate::{error::SmartwebError, operation::Operation};

/// Entity types whose returned fields can be restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// Categories.
    Category,
    /// Currencies.
    Currency,
    /// Delivery methods.
    Delivery,
    /// Discounts.
    Discount,
    /// Discount groups.
    DiscountGroup,
    /// Orders.
    Order,
    /// Order lines.
    OrderLine,
    /// Page texts.
    PageText,
    /// Payment methods.
    Payment,
    /// Products.
    Product,
    /// Product variants.
    ProductVariant,
    /// Product custom data.
    ProductCustomData,
    /// Sites.
    Site,
    /// Users.
    User,
    /// User groups.
    UserGroup,
    /// VAT groups.
    VatGroup,
}

impl EntityType {
    /// Every entity type.
    pub const ALL: &'static [Self] = &[
        Self::Category,
        Self::Currency,
        Self::Delivery,
        Self::Discount,
        Self::DiscountGroup,
        Self::Order,
        Self::OrderLine,
        Self::PageText,
        Self::Payment,
        Self::Product,
        Self::ProductVariant,
        Self::ProductCustomData,
        Self::Site,
        Self::User,
        Self::UserGroup,
        Self::VatGroup,
    ];

    /// Type name as the remote service spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Currency => "Currency",
            Self::Delivery => "Delivery",
            Self::Discount => "Discount",
            Self::DiscountGroup => "DiscountGroup",
            Self::Order => "Order",
            Self::OrderLine => "OrderLine",
            Self::PageText => "PageText",
            Self::Payment => "Payment",
            Self::Product => "Product",
            Self::ProductVariant => "ProductVariant",
            Self::ProductCustomData => "ProductCustomData",
            Self::Site => "Site",
            Self::User => "User",
            Self::UserGroup => "UserGroup",
            Self::VatGroup => "VatGroup",
        }
    }

    /// Operation that restricts fields for this type.
    ///
    /// Order lines, variants and custom data are configured through their parent entity's
    /// operations.
    #[must_use]
    pub const fn set_fields_operation(self) -> Operation {
        match self {
            Self::Category => Operation::CategorySetFields,
            Self::Currency => Operation::CurrencySetFields,
            Self::Delivery => Operation::DeliverySetFields,
            Self::Discount => Operation::DiscountSetFields,
            Self::DiscountGroup => Operation::DiscountGroupSetFields,
            Self::Order => Operation::OrderSetFields,
            Self::OrderLine => Operation::OrderSetOrderLineFields,
            Self::PageText => Operation::PageTextSetFields,
            Self::Payment => Operation::PaymentSetFields,
            Self::Product => Operation::ProductSetFields,
            Self::ProductVariant => Operation::ProductSetVariantFields,
            Self::ProductCustomData => Operation::ProductSetCustomDataFields,
            Self::Site => Operation::SiteSetFields,
            Self::User => Operation::UserSetFields,
            Self::UserGroup => Operation::UserGroupSetFields,
            Self::VatGroup => Operation::VatGroupSetFields,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = SmartwebError;

    /// Parses a type name; the first letter may be lowercase (`"orderLine"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = capitalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|entity| entity.as_str() == name)
            .ok_or_else(|| SmartwebError::InvalidInput(format!("unknown entity type: {s}")))
    }
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Builds the `Fields` parameter: each name capitalized, comma-joined.
///
/// # Examples
///
/// ```
/// use smartweb_client::fields::field_list;
///
/// assert_eq!(field_list(["id", "title"]), "Id,Title");
/// ```
#[must_use]
pub fn field_list<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields.into_iter().map(|field| capitalize(field.as_ref())).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_field_list() {
        assert_eq!(field_list(["id", "title"]), "Id,Title");
        assert_eq!(field_list(["Id", "itemNumber"]), "Id,ItemNumber");
        assert_eq!(field_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("Email"), "Email");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ørsted"), "Ørsted");
    }

    #[test]
    fn test_entity_from_str() {
        assert_eq!("Product".parse::<EntityType>().unwrap(), EntityType::Product);
        assert_eq!("orderLine".parse::<EntityType>().unwrap(), EntityType::OrderLine);
        assert_eq!("user".parse::<EntityType>().unwrap(), EntityType::User);
        assert!(matches!("Widget".parse::<EntityType>(), Err(SmartwebError::InvalidInput(_))));
    }

    #[test]
    fn test_set_fields_operation_names() {
        assert_eq!(EntityType::Product.set_fields_operation().as_str(), "Product_SetFields");
        assert_eq!(EntityType::OrderLine.set_fields_operation().as_str(), "Order_SetOrderLineFields");
        assert_eq!(
            EntityType::ProductVariant.set_fields_operation().as_str(),
            "Product_SetVariantFields"
        );
        assert_eq!(
            EntityType::ProductCustomData.set_fields_operation().as_str(),
            "Product_SetCustomDataFields"
        );
    }

    #[test]
    fn test_plain_entities_use_type_prefix() {
        let special =
            [EntityType::OrderLine, EntityType::ProductVariant, EntityType::ProductCustomData];
        for entity in EntityType::ALL.iter().filter(|entity| !special.contains(entity)) {
            assert_eq!(
                entity.set_fields_operation().as_str(),
                format!("{entity}_SetFields"),
                "{entity}"
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_field_list_capitalizes_each_name(
            fields in prop::collection::vec("[a-z][a-zA-Z0-9]{0,20}", 1..10),
        ) {
            let joined = field_list(&fields);
            let parts: Vec<&str> = joined.split(',').collect();

            prop_assert_eq!(parts.len(), fields.len());
            for (part, field) in parts.iter().zip(&fields) {
                prop_assert!(part.starts_with(|c: char| c.is_ascii_uppercase()));
                prop_assert_eq!(&part[1..], &field[1..]);
                prop_assert!(part.eq_ignore_ascii_case(field));
            }
        }
    }
}
