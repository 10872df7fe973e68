//! Product variant operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::ProductVariant, operation::Operation, params::Params,
    payload::Payload, transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a variant cannot be decoded.
    pub async fn get_product_variants(&self, product_id: i64) -> Result<Vec<ProductVariant>> {
        self.fetch_many(Operation::ProductGetVariants, Params::new().with("ProductId", product_id))
            .await
    }

    /// Fetches a variant by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the variant cannot be decoded.
    pub async fn get_product_variant(&self, variant_id: i64) -> Result<Option<ProductVariant>> {
        self.fetch_one(
            Operation::ProductGetVariantById,
            Params::new().with("VariantId", variant_id),
        )
        .await
    }

    /// Lists the variants sharing an item number.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a variant cannot be decoded.
    pub async fn get_product_variants_by_item_number(
        &self,
        item_number: &str,
    ) -> Result<Vec<ProductVariant>> {
        self.fetch_many(
            Operation::ProductGetVariantsByItemNumber,
            Params::new().with("ItemNumber", item_number),
        )
        .await
    }

    /// Creates a variant.
    ///
    /// # Errors
    ///
    /// Returns error if the variant cannot be serialized or the call fails.
    pub async fn create_product_variant(&self, variant: &ProductVariant) -> Result<Payload> {
        info!(product_id = ?variant.product_id, "creating product variant");
        self.call(
            Operation::ProductCreateVariant,
            Params::new().with_record("VariantData", variant)?,
        )
        .await
    }

    /// Updates a variant.
    ///
    /// # Errors
    ///
    /// Returns error if the variant cannot be serialized or the call fails.
    pub async fn update_product_variant(&self, variant: &ProductVariant) -> Result<Payload> {
        info!(variant_id = ?variant.id, "updating product variant");
        self.call(
            Operation::ProductUpdateVariant,
            Params::new().with_record("VariantData", variant)?,
        )
        .await
    }

    /// Deletes a variant.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_product_variant(&self, variant_id: i64) -> Result<Payload> {
        info!(variant_id, "deleting product variant");
        self.call(Operation::ProductDeleteVariant, Params::new().with("VariantId", variant_id))
            .await
    }
}
