//! Payment method operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::PaymentMethod, operation::Operation, params::Params,
    payload::Payload, transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every payment method.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a method cannot be decoded.
    pub async fn get_payment_methods(&self) -> Result<Vec<PaymentMethod>> {
        self.fetch_many(Operation::PaymentGetAll, Params::new()).await
    }

    /// Fetches a payment method by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the method cannot be decoded.
    pub async fn get_payment_method(&self, payment_id: i64) -> Result<Option<PaymentMethod>> {
        self.fetch_one(Operation::PaymentGetById, Params::new().with("PaymentId", payment_id))
            .await
    }

    /// Creates a payment method.
    ///
    /// # Errors
    ///
    /// Returns error if the method cannot be serialized or the call fails.
    pub async fn create_payment_method(&self, method: &PaymentMethod) -> Result<Payload> {
        info!(title = ?method.title, "creating payment method");
        self.call(Operation::PaymentCreate, Params::new().with_record("PaymentData", method)?)
            .await
    }

    /// Updates a payment method.
    ///
    /// # Errors
    ///
    /// Returns error if the method cannot be serialized or the call fails.
    pub async fn update_payment_method(&self, method: &PaymentMethod) -> Result<Payload> {
        info!(payment_id = ?method.id, "updating payment method");
        self.call(Operation::PaymentUpdate, Params::new().with_record("PaymentData", method)?)
            .await
    }

    /// Deletes a payment method.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_payment_method(&self, payment_id: i64) -> Result<Payload> {
        info!(payment_id, "deleting payment method");
        self.call(Operation::PaymentDelete, Params::new().with("PaymentId", payment_id)).await
    }
}
