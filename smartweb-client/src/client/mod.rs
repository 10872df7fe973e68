//! Client facade.
//!
//! [`SmartwebClient`] opens a session with `Solution_Connect` and exposes one method per remote
//! operation. Every method goes through [`SmartwebClient::call`], which encodes the envelope,
//! posts it, decodes the reply and normalizes the result into a [`Payload`]. Methods then decode
//! records:
//!
//! - single lookups return `Ok(None)` when the reply carries no `Id`
//! - list lookups accept a lone record and return it as a one-element list
//! - create, update and delete return the reply verbatim as a [`Payload`]
//!
//! Methods are grouped by entity in the submodules.
//!
//! # Examples
//!
//! ```rust,no_run
//! use smartweb_client::{ClientConfig, Credentials, SmartwebClient};
//!
//! # async fn example() -> smartweb_client::Result<()> {
//! let config = ClientConfig::new(Credentials::new("api-user", "secret"));
//! let client = SmartwebClient::connect(config).await?;
//!
//! if let Some(product) = client.get_product(42).await? {
//!     println!("{:?}", product.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    cache::UserCache,
    config::{ClientConfig, Credentials},
    error::{Result, SmartwebError},
    fields::{EntityType, field_list},
    models::Record,
    operation::Operation,
    params::Params,
    payload::Payload,
    soap::{decode_response, encode_request, soap_action},
    transport::{HttpTransport, SoapRequest, Transport},
};

mod categories;
mod currencies;
mod custom_data;
mod deliveries;
mod discounts;
mod orders;
mod pages;
mod payments;
mod products;
mod seo;
mod sites;
mod users;
mod variants;
mod vat;

pub use orders::{DEFAULT_ORDER_STATUSES, month_windows};

/// Typed client for the remote SOAP API.
///
/// Calls are issued one at a time; each method awaits its reply before returning.
#[derive(Debug)]
pub struct SmartwebClient<T: Transport = HttpTransport> {
    transport: T,
    endpoint: String,
    namespace: String,
    user_cache: Arc<UserCache>,
}

impl SmartwebClient<HttpTransport> {
    /// Validates `config`, builds an HTTP transport and opens a session.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::ConfigError` if the configuration is invalid
    /// - `SmartwebError::ConnectionRejected` if the service refuses the credentials
    /// - any transport or remote fault raised by `Solution_Connect`
    #[instrument(skip(config), fields(endpoint = %config.endpoint))]
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(&config.http)?;
        Self::connect_with_transport(config, transport).await
    }
}

impl<T: Transport> SmartwebClient<T> {
    /// Opens a session over the given transport.
    ///
    /// The credentials are sent once and not kept; the transport carries the session.
    ///
    /// # Errors
    ///
    /// Same as [`SmartwebClient::connect`].
    pub async fn connect_with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let ClientConfig { endpoint, namespace, credentials, .. } = config;

        let client = Self { transport, endpoint, namespace, user_cache: Arc::default() };
        client.open_session(credentials).await?;

        info!(protocol = client.transport.protocol_name(), "session opened");
        Ok(client)
    }

    async fn open_session(&self, credentials: Credentials) -> Result<()> {
        let Credentials { username, password } = credentials;
        let params = Params::new().with("Username", username).with("Password", password);

        let reply = self.call(Operation::SolutionConnect, params).await?;
        if reply.as_bool() == Some(false) {
            return Err(SmartwebError::ConnectionRejected(
                "Solution_Connect answered false".to_owned(),
            ));
        }
        Ok(())
    }

    /// Replaces the user cache, e.g. to share one between clients.
    #[must_use]
    pub fn with_user_cache(mut self, cache: Arc<UserCache>) -> Self {
        self.user_cache = cache;
        self
    }

    /// The user cache.
    #[must_use]
    pub fn user_cache(&self) -> &Arc<UserCache> {
        &self.user_cache
    }

    /// Empties the user cache.
    pub async fn invalidate_user_cache(&self) {
        debug!("user cache invalidated");
        self.user_cache.invalidate().await;
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Service endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Service namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Calls one remote operation and returns its normalized result.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::RemoteFault` if the reply is a SOAP fault
    /// - `SmartwebError::TransportError` for a non-success status without a fault body
    /// - `SmartwebError::MalformedResponse` if the reply is not a SOAP envelope
    /// - `SmartwebError::HttpError` if the request fails
    #[instrument(skip(self, params), fields(operation = %operation, params = params.len()))]
    pub async fn call(&self, operation: Operation, params: Params) -> Result<Payload> {
        let name = operation.as_str();
        let body = encode_request(&self.namespace, name, &params);
        let action = soap_action(&self.namespace, name);

        let request = SoapRequest {
            endpoint: &self.endpoint,
            soap_action: &action,
            operation: name,
            body: body.as_bytes(),
        };
        let response = self.transport.post(request).await?;

        let decoded = std::str::from_utf8(&response.body)
            .map_err(|e| SmartwebError::MalformedResponse(format!("reply is not UTF-8: {e}")))
            .and_then(decode_response);

        match decoded {
            Err(fault @ SmartwebError::RemoteFault { .. }) => {
                warn!(error = %fault, "remote fault");
                Err(fault)
            }
            _ if !response.is_success() => Err(SmartwebError::TransportError(format!(
                "{name} failed with HTTP status {}",
                response.status
            ))),
            Ok(value) => {
                let payload = Payload::from_response(name, value);
                debug!(empty = payload.is_empty(), "call completed");
                Ok(payload)
            }
            Err(e) => Err(e),
        }
    }

    /// Calls a single-record lookup. Returns `None` unless the reply carries a non-null `Id`.
    pub(crate) async fn fetch_one<R: Record>(
        &self,
        operation: Operation,
        params: Params,
    ) -> Result<Option<R>> {
        let Some(value) = self.call(operation, params).await?.into_single() else {
            return Ok(None);
        };
        if value.get("Id").is_none_or(Value::is_null) {
            debug!(record = R::NAME, "no record in reply");
            return Ok(None);
        }
        R::from_value(value).map(Some)
    }

    /// Calls a list lookup and decodes every item in remote order.
    pub(crate) async fn fetch_many<R: Record>(
        &self,
        operation: Operation,
        params: Params,
    ) -> Result<Vec<R>> {
        match self.call(operation, params).await? {
            Payload::Single(value) if !value.is_object() => {
                debug!(record = R::NAME, "non-record reply to list lookup");
                Ok(Vec::new())
            }
            payload => payload.into_vec().into_iter().map(R::from_value).collect(),
        }
    }

    /// Selects the language of subsequent replies.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn set_language(&self, language_iso: &str) -> Result<Payload> {
        info!(language_iso, "setting session language");
        self.call(Operation::SolutionSetLanguage, Params::new().with("LanguageISO", language_iso))
            .await
    }

    /// Restricts which fields the service returns for `entity` for the rest of the session.
    ///
    /// Field names are capitalized and comma-joined: `["id", "title"]` is sent as
    /// `Fields=Id,Title`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn set_fields<I, S>(&self, entity: EntityType, fields: I) -> Result<Payload>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = field_list(fields);
        info!(%entity, %fields, "restricting fields");
        self.call(entity.set_fields_operation(), Params::new().with("Fields", fields)).await
    }
}

#[cfg(test)]
impl<T: Transport> SmartwebClient<T> {
    /// Builds a client without opening a session.
    pub(crate) fn unconnected(transport: T) -> Self {
        Self {
            transport,
            endpoint: crate::config::DEFAULT_ENDPOINT.to_owned(),
            namespace: crate::config::DEFAULT_NAMESPACE.to_owned(),
            user_cache: Arc::default(),
        }
    }
}
