//! Discount and discount group operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result,
    models::{Discount, DiscountGroup},
    operation::Operation,
    params::Params,
    payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every discount.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a discount cannot be decoded.
    pub async fn get_discounts(&self) -> Result<Vec<Discount>> {
        self.fetch_many(Operation::DiscountGetAll, Params::new()).await
    }

    /// Fetches a discount by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the discount cannot be decoded.
    pub async fn get_discount(&self, discount_id: i64) -> Result<Option<Discount>> {
        self.fetch_one(Operation::DiscountGetById, Params::new().with("DiscountId", discount_id))
            .await
    }

    /// Creates a discount.
    ///
    /// # Errors
    ///
    /// Returns error if the discount cannot be serialized or the call fails.
    pub async fn create_discount(&self, discount: &Discount) -> Result<Payload> {
        info!(product_id = ?discount.product_id, "creating discount");
        self.call(Operation::DiscountCreate, Params::new().with_record("DiscountData", discount)?)
            .await
    }

    /// Updates a discount.
    ///
    /// # Errors
    ///
    /// Returns error if the discount cannot be serialized or the call fails.
    pub async fn update_discount(&self, discount: &Discount) -> Result<Payload> {
        info!(discount_id = ?discount.id, "updating discount");
        self.call(Operation::DiscountUpdate, Params::new().with_record("DiscountData", discount)?)
            .await
    }

    /// Deletes a discount.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_discount(&self, discount_id: i64) -> Result<Payload> {
        info!(discount_id, "deleting discount");
        self.call(Operation::DiscountDelete, Params::new().with("DiscountId", discount_id)).await
    }

    /// Lists every discount group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a group cannot be decoded.
    pub async fn get_discount_groups(&self) -> Result<Vec<DiscountGroup>> {
        self.fetch_many(Operation::DiscountGroupGetAll, Params::new()).await
    }

    /// Fetches a discount group by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the group cannot be decoded.
    pub async fn get_discount_group(&self, group_id: i64) -> Result<Option<DiscountGroup>> {
        self.fetch_one(
            Operation::DiscountGroupGetById,
            Params::new().with("DiscountGroupId", group_id),
        )
        .await
    }

    /// Creates a discount group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn create_discount_group(&self, group: &DiscountGroup) -> Result<Payload> {
        info!(title = ?group.title, "creating discount group");
        self.call(
            Operation::DiscountGroupCreate,
            Params::new().with_record("DiscountGroupData", group)?,
        )
        .await
    }

    /// Updates a discount group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn update_discount_group(&self, group: &DiscountGroup) -> Result<Payload> {
        info!(group_id = ?group.id, "updating discount group");
        self.call(
            Operation::DiscountGroupUpdate,
            Params::new().with_record("DiscountGroupData", group)?,
        )
        .await
    }

    /// Deletes a discount group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_discount_group(&self, group_id: i64) -> Result<Payload> {
        info!(group_id, "deleting discount group");
        self.call(
            Operation::DiscountGroupDelete,
            Params::new().with("DiscountGroupId", group_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{SmartwebClient, transport::testing::ScriptedTransport};

    #[tokio::test]
    async fn test_get_discounts_empty_reply() {
        let client =
            SmartwebClient::unconnected(ScriptedTransport::new().result("Discount_GetAll", ""));
        assert!(client.get_discounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_discount_group() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("DiscountGroup_Delete", "true"),
        );

        let reply = client.delete_discount_group(6).await.unwrap();

        assert!(reply.is_confirmed());
        assert!(client.transport().last_body().contains("<DiscountGroupId>6</DiscountGroupId>"));
    }
}
