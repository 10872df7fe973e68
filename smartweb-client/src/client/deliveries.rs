//! Delivery method operations.

use tracing::{info, warn};

use super::SmartwebClient;
use crate::{
    error::Result,
    models::{Delivery, Order, Record},
    operation::Operation,
    params::Params,
    payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every delivery method.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a method cannot be decoded.
    pub async fn get_deliveries(&self) -> Result<Vec<Delivery>> {
        self.fetch_many(Operation::DeliveryGetAll, Params::new()).await
    }

    /// Fetches a delivery method by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the method cannot be decoded.
    pub async fn get_delivery(&self, delivery_id: i64) -> Result<Option<Delivery>> {
        self.fetch_one(Operation::DeliveryGetById, Params::new().with("DeliveryId", delivery_id))
            .await
    }

    /// Creates a delivery method.
    ///
    /// # Errors
    ///
    /// Returns error if the method cannot be serialized or the call fails.
    pub async fn create_delivery(&self, delivery: &Delivery) -> Result<Payload> {
        info!(title = ?delivery.title, "creating delivery method");
        self.call(Operation::DeliveryCreate, Params::new().with_record("DeliveryData", delivery)?)
            .await
    }

    /// Updates a delivery method.
    ///
    /// # Errors
    ///
    /// Returns error if the method cannot be serialized or the call fails.
    pub async fn update_delivery(&self, delivery: &Delivery) -> Result<Payload> {
        info!(delivery_id = ?delivery.id, "updating delivery method");
        self.call(Operation::DeliveryUpdate, Params::new().with_record("DeliveryData", delivery)?)
            .await
    }

    /// Deletes a delivery method.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_delivery(&self, delivery_id: i64) -> Result<Payload> {
        info!(delivery_id, "deleting delivery method");
        self.call(Operation::DeliveryDelete, Params::new().with("DeliveryId", delivery_id)).await
    }

    /// Moves an order's delivery to another pickup point.
    ///
    /// The order's delivery is updated only once the service confirms the change; a refused
    /// change leaves the order untouched and returns the reply as is.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the order has no id
    /// - any error from the call
    pub async fn update_droppoint_id(
        &self,
        order: &mut Order,
        droppoint_id: &str,
    ) -> Result<Payload> {
        let order_id = order.require_id()?;
        info!(order_id, droppoint_id, "updating drop point");

        let params = Params::new().with("OrderId", order_id).with("DropPointId", droppoint_id);
        let reply = self.call(Operation::DeliveryUpdateDropPoint, params).await?;

        if reply.is_confirmed() {
            order.delivery.get_or_insert_with(Default::default).droppoint_id =
                Some(droppoint_id.to_owned());
        } else {
            warn!(order_id, "drop point change not confirmed");
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        SmartwebClient, SmartwebError,
        models::{Order, OrderDelivery},
        transport::testing::ScriptedTransport,
    };

    #[tokio::test]
    async fn test_update_droppoint_id_confirmed() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("Delivery_UpdateDropPoint", "true"),
        );
        let mut order = Order {
            id: Some(3),
            delivery: Some(OrderDelivery { id: Some(8), ..OrderDelivery::default() }),
            ..Order::default()
        };

        client.update_droppoint_id(&mut order, "DP-1").await.unwrap();

        let delivery = order.delivery.unwrap();
        assert_eq!(delivery.droppoint_id.as_deref(), Some("DP-1"));
        assert_eq!(delivery.id, Some(8));
        let body = client.transport().last_body();
        assert!(body.contains("<OrderId>3</OrderId>"));
        assert!(body.contains("<DropPointId>DP-1</DropPointId>"));
    }

    #[tokio::test]
    async fn test_update_droppoint_id_refused_leaves_order() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("Delivery_UpdateDropPoint", "false"),
        );
        let mut order = Order { id: Some(3), ..Order::default() };

        let reply = client.update_droppoint_id(&mut order, "DP-1").await.unwrap();

        assert_eq!(reply.as_bool(), Some(false));
        assert!(order.delivery.is_none());
    }

    #[tokio::test]
    async fn test_update_droppoint_id_requires_order_id() {
        let client = SmartwebClient::unconnected(ScriptedTransport::new());
        let result = client.update_droppoint_id(&mut Order::default(), "DP-1").await;
        assert!(matches!(result, Err(SmartwebError::InvalidInput(_))));
    }
}
