//! Remote operation catalog.
//!
//! Every remote operation name the client calls, in one table. Facade methods refer to
//! operations only through [`Operation`].

use std::fmt;

/// A remote SOAP operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    /// Opens a session with username and password.
    SolutionConnect,
    /// Selects the language of subsequent replies.
    SolutionSetLanguage,

    /// Lists every category.
    CategoryGetAll,
    /// Fetches one category by id.
    CategoryGetById,
    /// Creates a category.
    CategoryCreate,
    /// Updates a category.
    CategoryUpdate,
    /// Deletes a category.
    CategoryDelete,
    /// Restricts the fields returned for categories.
    CategorySetFields,

    /// Lists every currency.
    CurrencyGetAll,
    /// Fetches one currency by id.
    CurrencyGetById,
    /// Fetches a currency by ISO code.
    CurrencyGetByIso,
    /// Creates a currency.
    CurrencyCreate,
    /// Updates a currency.
    CurrencyUpdate,
    /// Deletes a currency.
    CurrencyDelete,
    /// Restricts the fields returned for currencies.
    CurrencySetFields,

    /// Lists every delivery method.
    DeliveryGetAll,
    /// Fetches one delivery method by id.
    DeliveryGetById,
    /// Creates a delivery method.
    DeliveryCreate,
    /// Updates a delivery method.
    DeliveryUpdate,
    /// Deletes a delivery method.
    DeliveryDelete,
    /// Changes the drop point of an order's delivery.
    DeliveryUpdateDropPoint,
    /// Restricts the fields returned for delivery methods.
    DeliverySetFields,

    /// Lists every discount.
    DiscountGetAll,
    /// Fetches one discount by id.
    DiscountGetById,
    /// Creates a discount.
    DiscountCreate,
    /// Updates a discount.
    DiscountUpdate,
    /// Deletes a discount.
    DiscountDelete,
    /// Restricts the fields returned for discounts.
    DiscountSetFields,

    /// Lists every discount group.
    DiscountGroupGetAll,
    /// Fetches one discount group by id.
    DiscountGroupGetById,
    /// Creates a discount group.
    DiscountGroupCreate,
    /// Updates a discount group.
    DiscountGroupUpdate,
    /// Deletes a discount group.
    DiscountGroupDelete,
    /// Restricts the fields returned for discount groups.
    DiscountGroupSetFields,

    /// Fetches one order by id.
    OrderGetById,
    /// Lists orders created in a date range.
    OrderGetByDate,
    /// Lists a user's orders in an optional date range.
    OrderGetByDateAndUser,
    /// Lists orders updated in an optional time range.
    OrderGetByDateUpdated,
    /// Creates an order.
    OrderCreate,
    /// Sets the status of an order.
    OrderUpdateStatus,
    /// Sets the comment of an order.
    OrderUpdateComment,
    /// Creates an invoice for an order.
    OrderCreateInvoice,
    /// Registers a payment transaction code.
    OrderSetTransactionCode,
    /// Lists the lines of an order.
    OrderGetLines,
    /// Sets the status of an order line.
    OrderUpdateLineStatus,
    /// Lists the addresses attached to an order line.
    OrderGetLineAddresses,
    /// Fetches an order delivery.
    OrderGetDelivery,
    /// Fetches an order payment.
    OrderGetPayment,
    /// Fetches the currency of an order.
    OrderGetCurrency,
    /// Fetches the customer of an order.
    OrderGetCustomer,
    /// Lists the transactions of an order.
    OrderGetTransactions,
    /// Restricts the fields returned for orders.
    OrderSetFields,
    /// Restricts the fields returned for order lines.
    OrderSetOrderLineFields,

    /// Lists every page text.
    PageTextGetAll,
    /// Fetches one page text by id.
    PageTextGetById,
    /// Creates a page text.
    PageTextCreate,
    /// Updates a page text.
    PageTextUpdate,
    /// Deletes a page text.
    PageTextDelete,
    /// Restricts the fields returned for page texts.
    PageTextSetFields,

    /// Lists every payment method.
    PaymentGetAll,
    /// Fetches one payment method by id.
    PaymentGetById,
    /// Creates a payment method.
    PaymentCreate,
    /// Updates a payment method.
    PaymentUpdate,
    /// Deletes a payment method.
    PaymentDelete,
    /// Restricts the fields returned for payment methods.
    PaymentSetFields,

    /// Lists every product.
    ProductGetAll,
    /// Fetches one product by id.
    ProductGetById,
    /// Fetches several products by id.
    ProductGetByIds,
    /// Fetches a product by item number.
    ProductGetByItemNumber,
    /// Lists the products of a category.
    ProductGetByCategory,
    /// Lists products updated in a time range.
    ProductGetByUpdatedDate,
    /// Searches products by text.
    ProductSearch,
    /// Creates a product.
    ProductCreate,
    /// Updates a product.
    ProductUpdate,
    /// Deletes a product.
    ProductDelete,
    /// Restricts the fields returned for products.
    ProductSetFields,
    /// Lists the pictures of a product.
    ProductGetPictures,
    /// Adds a picture to a product.
    ProductCreatePicture,
    /// Deletes a product picture.
    ProductDeletePicture,
    /// Lists every delivery time.
    ProductGetDeliveryTimeAll,
    /// Lists every additional product type.
    ProductGetAdditionalTypesAll,
    /// Lists the variants of a product.
    ProductGetVariants,
    /// Fetches one variant by id.
    ProductGetVariantById,
    /// Lists variants by item number.
    ProductGetVariantsByItemNumber,
    /// Creates a variant.
    ProductCreateVariant,
    /// Updates a variant.
    ProductUpdateVariant,
    /// Deletes a variant.
    ProductDeleteVariant,
    /// Restricts the fields returned for variants.
    ProductSetVariantFields,
    /// Lists every custom data value.
    ProductGetCustomDataAll,
    /// Lists custom data values of one type.
    ProductGetCustomDataByType,
    /// Creates a custom data value.
    ProductCreateCustomData,
    /// Updates a custom data value.
    ProductUpdateCustomData,
    /// Deletes a custom data value.
    ProductDeleteCustomData,
    /// Restricts the fields returned for custom data.
    ProductSetCustomDataFields,

    /// Lists every SEO redirect.
    SeoRedirectGetAll,
    /// Fetches one SEO redirect by id.
    SeoRedirectGetById,
    /// Creates an SEO redirect.
    SeoRedirectCreate,
    /// Updates an SEO redirect.
    SeoRedirectUpdate,
    /// Deletes an SEO redirect.
    SeoRedirectDelete,

    /// Lists every site.
    SiteGetAll,
    /// Fetches one site by id.
    SiteGetById,
    /// Restricts the fields returned for sites.
    SiteSetFields,

    /// Lists every user.
    UserGetAll,
    /// Lists newsletter subscribers.
    UserGetAllNewsletter,
    /// Fetches one user by id.
    UserGetById,
    /// Lists the users of a user group.
    UserGetByGroup,
    /// Creates an user.
    UserCreate,
    /// Updates an user.
    UserUpdate,
    /// Deletes an user.
    UserDelete,
    /// Restricts the fields returned for users.
    UserSetFields,

    /// Lists every user group.
    UserGroupGetAll,
    /// Fetches one user group by id.
    UserGroupGetById,
    /// Creates an user group.
    UserGroupCreate,
    /// Updates an user group.
    UserGroupUpdate,
    /// Deletes an user group.
    UserGroupDelete,
    /// Restricts the fields returned for user groups.
    UserGroupSetFields,

    /// Lists every VAT group.
    VatGroupGetAll,
    /// Fetches one VAT group by id.
    VatGroupGetById,
    /// Creates a VAT group.
    VatGroupCreate,
    /// Updates a VAT group.
    VatGroupUpdate,
    /// Deletes a VAT group.
    VatGroupDelete,
    /// Restricts the fields returned for VAT groups.
    VatGroupSetFields,
}

impl Operation {
    /// Every operation, grouped by entity.
    pub const ALL: &'static [Self] = &[
        Self::SolutionConnect,
        Self::SolutionSetLanguage,
        Self::CategoryGetAll,
        Self::CategoryGetById,
        Self::CategoryCreate,
        Self::CategoryUpdate,
        Self::CategoryDelete,
        Self::CategorySetFields,
        Self::CurrencyGetAll,
        Self::CurrencyGetById,
        Self::CurrencyGetByIso,
        Self::CurrencyCreate,
        Self::CurrencyUpdate,
        Self::CurrencyDelete,
        Self::CurrencySetFields,
        Self::DeliveryGetAll,
        Self::DeliveryGetById,
        Self::DeliveryCreate,
        Self::DeliveryUpdate,
        Self::DeliveryDelete,
        Self::DeliveryUpdateDropPoint,
        Self::DeliverySetFields,
        Self::DiscountGetAll,
        Self::DiscountGetById,
        Self::DiscountCreate,
        Self::DiscountUpdate,
        Self::DiscountDelete,
        Self::DiscountSetFields,
        Self::DiscountGroupGetAll,
        Self::DiscountGroupGetById,
        Self::DiscountGroupCreate,
        Self::DiscountGroupUpdate,
        Self::DiscountGroupDelete,
        Self::DiscountGroupSetFields,
        Self::OrderGetById,
        Self::OrderGetByDate,
        Self::OrderGetByDateAndUser,
        Self::OrderGetByDateUpdated,
        Self::OrderCreate,
        Self::OrderUpdateStatus,
        Self::OrderUpdateComment,
        Self::OrderCreateInvoice,
        Self::OrderSetTransactionCode,
        Self::OrderGetLines,
        Self::OrderUpdateLineStatus,
        Self::OrderGetLineAddresses,
        Self::OrderGetDelivery,
        Self::OrderGetPayment,
        Self::OrderGetCurrency,
        Self::OrderGetCustomer,
        Self::OrderGetTransactions,
        Self::OrderSetFields,
        Self::OrderSetOrderLineFields,
        Self::PageTextGetAll,
        Self::PageTextGetById,
        Self::PageTextCreate,
        Self::PageTextUpdate,
        Self::PageTextDelete,
        Self::PageTextSetFields,
        Self::PaymentGetAll,
        Self::PaymentGetById,
        Self::PaymentCreate,
        Self::PaymentUpdate,
        Self::PaymentDelete,
        Self::PaymentSetFields,
        Self::ProductGetAll,
        Self::ProductGetById,
        Self::ProductGetByIds,
        Self::ProductGetByItemNumber,
        Self::ProductGetByCategory,
        Self::ProductGetByUpdatedDate,
        Self::ProductSearch,
        Self::ProductCreate,
        Self::ProductUpdate,
        Self::ProductDelete,
        Self::ProductSetFields,
        Self::ProductGetPictures,
        Self::ProductCreatePicture,
        Self::ProductDeletePicture,
        Self::ProductGetDeliveryTimeAll,
        Self::ProductGetAdditionalTypesAll,
        Self::ProductGetVariants,
        Self::ProductGetVariantById,
        Self::ProductGetVariantsByItemNumber,
        Self::ProductCreateVariant,
        Self::ProductUpdateVariant,
        Self::ProductDeleteVariant,
        Self::ProductSetVariantFields,
        Self::ProductGetCustomDataAll,
        Self::ProductGetCustomDataByType,
        Self::ProductCreateCustomData,
        Self::ProductUpdateCustomData,
        Self::ProductDeleteCustomData,
        Self::ProductSetCustomDataFields,
        Self::SeoRedirectGetAll,
        Self::SeoRedirectGetById,
        Self::SeoRedirectCreate,
        Self::SeoRedirectUpdate,
        Self::SeoRedirectDelete,
        Self::SiteGetAll,
        Self::SiteGetById,
        Self::SiteSetFields,
        Self::UserGetAll,
        Self::UserGetAllNewsletter,
        Self::UserGetById,
        Self::UserGetByGroup,
        Self::UserCreate,
        Self::UserUpdate,
        Self::UserDelete,
        Self::UserSetFields,
        Self::UserGroupGetAll,
        Self::UserGroupGetById,
        Self::UserGroupCreate,
        Self::UserGroupUpdate,
        Self::UserGroupDelete,
        Self::UserGroupSetFields,
        Self::VatGroupGetAll,
        Self::VatGroupGetById,
        Self::VatGroupCreate,
        Self::VatGroupUpdate,
        Self::VatGroupDelete,
        Self::VatGroupSetFields,
    ];

    /// Remote operation name, as sent in the envelope and the `SOAPAction` header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SolutionConnect => "Solution_Connect",
            Self::SolutionSetLanguage => "Solution_SetLanguage",
            Self::CategoryGetAll => "Category_GetAll",
            Self::CategoryGetById => "Category_GetById",
            Self::CategoryCreate => "Category_Create",
            Self::CategoryUpdate => "Category_Update",
            Self::CategoryDelete => "Category_Delete",
            Self::CategorySetFields => "Category_SetFields",
            Self::CurrencyGetAll => "Currency_GetAll",
            Self::CurrencyGetById => "Currency_GetById",
            Self::CurrencyGetByIso => "Currency_GetByIso",
            Self::CurrencyCreate => "Currency_Create",
            Self::CurrencyUpdate => "Currency_Update",
            Self::CurrencyDelete => "Currency_Delete",
            Self::CurrencySetFields => "Currency_SetFields",
            Self::DeliveryGetAll => "Delivery_GetAll",
            Self::DeliveryGetById => "Delivery_GetById",
            Self::DeliveryCreate => "Delivery_Create",
            Self::DeliveryUpdate => "Delivery_Update",
            Self::DeliveryDelete => "Delivery_Delete",
            Self::DeliveryUpdateDropPoint => "Delivery_UpdateDropPoint",
            Self::DeliverySetFields => "Delivery_SetFields",
            Self::DiscountGetAll => "Discount_GetAll",
            Self::DiscountGetById => "Discount_GetById",
            Self::DiscountCreate => "Discount_Create",
            Self::DiscountUpdate => "Discount_Update",
            Self::DiscountDelete => "Discount_Delete",
            Self::DiscountSetFields => "Discount_SetFields",
            Self::DiscountGroupGetAll => "DiscountGroup_GetAll",
            Self::DiscountGroupGetById => "DiscountGroup_GetById",
            Self::DiscountGroupCreate => "DiscountGroup_Create",
            Self::DiscountGroupUpdate => "DiscountGroup_Update",
            Self::DiscountGroupDelete => "DiscountGroup_Delete",
            Self::DiscountGroupSetFields => "DiscountGroup_SetFields",
            Self::OrderGetById => "Order_GetById",
            Self::OrderGetByDate => "Order_GetByDate",
            Self::OrderGetByDateAndUser => "Order_GetByDateAndUser",
            Self::OrderGetByDateUpdated => "Order_GetByDateUpdated",
            Self::OrderCreate => "Order_Create",
            Self::OrderUpdateStatus => "Order_UpdateStatus",
            Self::OrderUpdateComment => "Order_UpdateComment",
            Self::OrderCreateInvoice => "Order_CreateInvoice",
            Self::OrderSetTransactionCode => "Order_SetTransactionCode",
            Self::OrderGetLines => "Order_GetLines",
            Self::OrderUpdateLineStatus => "Order_UpdateLineStatus",
            Self::OrderGetLineAddresses => "Order_GetLineAddresses",
            Self::OrderGetDelivery => "Order_GetDelivery",
            Self::OrderGetPayment => "Order_GetPayment",
            Self::OrderGetCurrency => "Order_GetCurrency",
            Self::OrderGetCustomer => "Order_GetCustomer",
            Self::OrderGetTransactions => "Order_GetTransactions",
            Self::OrderSetFields => "Order_SetFields",
            Self::OrderSetOrderLineFields => "Order_SetOrderLineFields",
            Self::PageTextGetAll => "PageText_GetAll",
            Self::PageTextGetById => "PageText_GetById",
            Self::PageTextCreate => "PageText_Create",
            Self::PageTextUpdate => "PageText_Update",
            Self::PageTextDelete => "PageText_Delete",
            Self::PageTextSetFields => "PageText_SetFields",
            Self::PaymentGetAll => "Payment_GetAll",
            Self::PaymentGetById => "Payment_GetById",
            Self::PaymentCreate => "Payment_Create",
            Self::PaymentUpdate => "Payment_Update",
            Self::PaymentDelete => "Payment_Delete",
            Self::PaymentSetFields => "Payment_SetFields",
            Self::ProductGetAll => "Product_GetAll",
            Self::ProductGetById => "Product_GetById",
            Self::ProductGetByIds => "Product_GetByIds",
            Self::ProductGetByItemNumber => "Product_GetByItemNumber",
            Self::ProductGetByCategory => "Product_GetByCategory",
            Self::ProductGetByUpdatedDate => "Product_GetByUpdatedDate",
            Self::ProductSearch => "Product_Search",
            Self::ProductCreate => "Product_Create",
            Self::ProductUpdate => "Product_Update",
            Self::ProductDelete => "Product_Delete",
            Self::ProductSetFields => "Product_SetFields",
            Self::ProductGetPictures => "Product_GetPictures",
            Self::ProductCreatePicture => "Product_CreatePicture",
            Self::ProductDeletePicture => "Product_DeletePicture",
            Self::ProductGetDeliveryTimeAll => "Product_GetDeliveryTimeAll",
            Self::ProductGetAdditionalTypesAll => "Product_GetAdditionalTypesAll",
            Self::ProductGetVariants => "Product_GetVariants",
            Self::ProductGetVariantById => "Product_GetVariantById",
            Self::ProductGetVariantsByItemNumber => "Product_GetVariantsByItemNumber",
            Self::ProductCreateVariant => "Product_CreateVariant",
            Self::ProductUpdateVariant => "Product_UpdateVariant",
            Self::ProductDeleteVariant => "Product_DeleteVariant",
            Self::ProductSetVariantFields => "Product_SetVariantFields",
            Self::ProductGetCustomDataAll => "Product_GetCustomDataAll",
            Self::ProductGetCustomDataByType => "Product_GetCustomDataByType",
            Self::ProductCreateCustomData => "Product_CreateCustomData",
            Self::ProductUpdateCustomData => "Product_UpdateCustomData",
            Self::ProductDeleteCustomData => "Product_DeleteCustomData",
            Self::ProductSetCustomDataFields => "Product_SetCustomDataFields",
            Self::SeoRedirectGetAll => "SEORedirect_GetAll",
            Self::SeoRedirectGetById => "SEORedirect_GetById",
            Self::SeoRedirectCreate => "SEORedirect_Create",
            Self::SeoRedirectUpdate => "SEORedirect_Update",
            Self::SeoRedirectDelete => "SEORedirect_Delete",
            Self::SiteGetAll => "Site_GetAll",
            Self::SiteGetById => "Site_GetById",
            Self::SiteSetFields => "Site_SetFields",
            Self::UserGetAll => "User_GetAll",
            Self::UserGetAllNewsletter => "User_GetAllNewsletter",
            Self::UserGetById => "User_GetById",
            Self::UserGetByGroup => "User_GetByGroup",
            Self::UserCreate => "User_Create",
            Self::UserUpdate => "User_Update",
            Self::UserDelete => "User_Delete",
            Self::UserSetFields => "User_SetFields",
            Self::UserGroupGetAll => "UserGroup_GetAll",
            Self::UserGroupGetById => "UserGroup_GetById",
            Self::UserGroupCreate => "UserGroup_Create",
            Self::UserGroupUpdate => "UserGroup_Update",
            Self::UserGroupDelete => "UserGroup_Delete",
            Self::UserGroupSetFields => "UserGroup_SetFields",
            Self::VatGroupGetAll => "VatGroup_GetAll",
            Self::VatGroupGetById => "VatGroup_GetById",
            Self::VatGroupCreate => "VatGroup_Create",
            Self::VatGroupUpdate => "VatGroup_Update",
            Self::VatGroupDelete => "VatGroup_Delete",
            Self::VatGroupSetFields => "VatGroup_SetFields",
        }
    }

    /// Name of the element the reply wraps its result in.
    #[must_use]
    pub fn result_name(self) -> String {
        format!("{}Result", self.as_str())
    }

    /// Looks up an operation by remote name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_operation_names_are_unique() {
        let names: HashSet<_> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_operation_names_are_entity_qualified() {
        for op in Operation::ALL {
            let Some((entity, action)) = op.as_str().split_once('_') else {
                panic!("{op} has no entity prefix");
            };
            assert!(!entity.is_empty() && !action.is_empty(), "{op}");
            assert!(action.chars().next().is_some_and(char::is_uppercase), "{op}");
        }
    }

    #[test]
    fn test_operation_from_name() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(Operation::from_name("Product_Explode"), None);
    }

    #[test]
    fn test_corrected_operation_names() {
        assert_eq!(Operation::CurrencyUpdate.as_str(), "Currency_Update");
        assert_eq!(Operation::VatGroupGetById.as_str(), "VatGroup_GetById");
        assert_eq!(Operation::OrderGetPayment.as_str(), "Order_GetPayment");
    }

    #[test]
    fn test_seo_redirect_keeps_remote_casing() {
        assert_eq!(Operation::SeoRedirectCreate.as_str(), "SEORedirect_Create");
    }

    #[test]
    fn test_result_name_and_display() {
        assert_eq!(Operation::ProductGetById.result_name(), "Product_GetByIdResult");
        assert_eq!(Operation::UserGetAll.to_string(), "User_GetAll");
    }
}
