//! VAT group operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::VatGroup, operation::Operation, params::Params, payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every VAT group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a group cannot be decoded.
    pub async fn get_vat_groups(&self) -> Result<Vec<VatGroup>> {
        self.fetch_many(Operation::VatGroupGetAll, Params::new()).await
    }

    /// Fetches a VAT group by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the group cannot be decoded.
    pub async fn get_vat_group(&self, group_id: i64) -> Result<Option<VatGroup>> {
        self.fetch_one(Operation::VatGroupGetById, Params::new().with("VatGroupId", group_id))
            .await
    }

    /// Creates a VAT group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn create_vat_group(&self, group: &VatGroup) -> Result<Payload> {
        info!(title = ?group.title, "creating vat group");
        self.call(Operation::VatGroupCreate, Params::new().with_record("VatGroupData", group)?)
            .await
    }

    /// Updates a VAT group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn update_vat_group(&self, group: &VatGroup) -> Result<Payload> {
        info!(group_id = ?group.id, "updating vat group");
        self.call(Operation::VatGroupUpdate, Params::new().with_record("VatGroupData", group)?)
            .await
    }

    /// Deletes a VAT group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_vat_group(&self, group_id: i64) -> Result<Payload> {
        info!(group_id, "deleting vat group");
        self.call(Operation::VatGroupDelete, Params::new().with("VatGroupId", group_id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{SmartwebClient, transport::testing::ScriptedTransport};

    #[tokio::test]
    async fn test_get_vat_group_calls_get_by_id() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("VatGroup_GetById", "<Id>1</Id><Title>Standard</Title>"),
        );

        let group = client.get_vat_group(1).await.unwrap().unwrap();

        assert_eq!(group.title.as_deref(), Some("Standard"));
        assert_eq!(client.transport().operations(), vec!["VatGroup_GetById"]);
    }
}
