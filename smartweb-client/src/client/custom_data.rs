//! Product custom data operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::ProductCustomData, operation::Operation, params::Params,
    payload::Payload, transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every custom data value.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a value cannot be decoded.
    pub async fn get_all_custom_data(&self) -> Result<Vec<ProductCustomData>> {
        self.fetch_many(Operation::ProductGetCustomDataAll, Params::new()).await
    }

    /// Lists the custom data values of one custom data type.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a value cannot be decoded.
    pub async fn get_custom_data_by_type(&self, type_id: i64) -> Result<Vec<ProductCustomData>> {
        self.fetch_many(
            Operation::ProductGetCustomDataByType,
            Params::new().with("CustomDataTypeId", type_id),
        )
        .await
    }

    /// Creates a custom data value.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized or the call fails.
    pub async fn create_custom_data(&self, data: &ProductCustomData) -> Result<Payload> {
        info!(type_id = ?data.type_id, "creating custom data");
        self.call(
            Operation::ProductCreateCustomData,
            Params::new().with_record("CustomDataData", data)?,
        )
        .await
    }

    /// Updates a custom data value.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized or the call fails.
    pub async fn update_custom_data(&self, data: &ProductCustomData) -> Result<Payload> {
        info!(custom_data_id = ?data.id, "updating custom data");
        self.call(
            Operation::ProductUpdateCustomData,
            Params::new().with_record("CustomDataData", data)?,
        )
        .await
    }

    /// Deletes a custom data value.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_custom_data(&self, custom_data_id: i64) -> Result<Payload> {
        info!(custom_data_id, "deleting custom data");
        self.call(
            Operation::ProductDeleteCustomData,
            Params::new().with("CustomDataId", custom_data_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{SmartwebClient, transport::testing::ScriptedTransport};

    #[tokio::test]
    async fn test_get_custom_data_by_type() {
        let client = SmartwebClient::unconnected(ScriptedTransport::new().result(
            "Product_GetCustomDataByType",
            "<item><Id>1</Id><TypeId>3</TypeId></item><item><Id>2</Id><TypeId>3</TypeId></item>",
        ));

        let values = client.get_custom_data_by_type(3).await.unwrap();

        assert!(values.iter().all(|value| value.type_id == Some(3)));
        assert!(client.transport().last_body().contains("<CustomDataTypeId>3</CustomDataTypeId>"));
    }
}
