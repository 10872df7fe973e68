//! Currency operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::Currency, operation::Operation, params::Params, payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every currency.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a currency cannot be decoded.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.fetch_many(Operation::CurrencyGetAll, Params::new()).await
    }

    /// Fetches a currency by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the currency cannot be decoded.
    pub async fn get_currency(&self, currency_id: i64) -> Result<Option<Currency>> {
        self.fetch_one(Operation::CurrencyGetById, Params::new().with("CurrencyId", currency_id))
            .await
    }

    /// Fetches a currency by ISO code, e.g. `"DKK"`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the currency cannot be decoded.
    pub async fn get_currency_by_iso(&self, iso: &str) -> Result<Option<Currency>> {
        self.fetch_one(Operation::CurrencyGetByIso, Params::new().with("Iso", iso)).await
    }

    /// Creates a currency.
    ///
    /// # Errors
    ///
    /// Returns error if the currency cannot be serialized or the call fails.
    pub async fn create_currency(&self, currency: &Currency) -> Result<Payload> {
        info!(iso = ?currency.iso, "creating currency");
        self.call(Operation::CurrencyCreate, Params::new().with_record("CurrencyData", currency)?)
            .await
    }

    /// Updates a currency.
    ///
    /// # Errors
    ///
    /// Returns error if the currency cannot be serialized or the call fails.
    pub async fn update_currency(&self, currency: &Currency) -> Result<Payload> {
        info!(currency_id = ?currency.id, "updating currency");
        self.call(Operation::CurrencyUpdate, Params::new().with_record("CurrencyData", currency)?)
            .await
    }

    /// Deletes a currency.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_currency(&self, currency_id: i64) -> Result<Payload> {
        info!(currency_id, "deleting currency");
        self.call(Operation::CurrencyDelete, Params::new().with("CurrencyId", currency_id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{SmartwebClient, models::Currency, transport::testing::ScriptedTransport};

    #[tokio::test]
    async fn test_get_currency_by_iso() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("Currency_GetByIso", "<Id>2</Id><Iso>EUR</Iso>"),
        );

        let currency = client.get_currency_by_iso("EUR").await.unwrap().unwrap();

        assert_eq!(currency.id, Some(2));
        assert!(client.transport().last_body().contains("<Iso>EUR</Iso>"));
    }

    #[tokio::test]
    async fn test_update_currency_calls_update() {
        let client =
            SmartwebClient::unconnected(ScriptedTransport::new().result("Currency_Update", "true"));
        let currency = Currency { id: Some(2), ..Currency::default() };

        client.update_currency(&currency).await.unwrap();

        assert_eq!(client.transport().operations(), vec!["Currency_Update"]);
    }
}
