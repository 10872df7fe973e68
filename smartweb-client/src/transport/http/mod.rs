//! HTTP transport implementation.
//!
//! Posts SOAP envelopes with reqwest. Each transport owns its own client and cookie store, so
//! the session opened by `Solution_Connect` stays with the client that opened it.

use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderValue},
};
use tracing::{debug, instrument};

use crate::{
    config::{HttpConfig, HttpVersion, validate_endpoint},
    error::{Result, SmartwebError},
    transport::{SoapRequest, Transport, TransportResponse, sealed},
};

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Rejects header values that could split the request.
fn validate_header(name: &str, value: &str) -> Result<()> {
    if value.contains('\r') || value.contains('\n') || value.contains('\0') {
        return Err(SmartwebError::TransportError(format!(
            "invalid {name} header: control characters not allowed"
        )));
    }
    Ok(())
}

/// HTTP/1.1 and HTTP/2 transport using reqwest.
///
/// # Examples
///
/// ```
/// use smartweb_client::{config::HttpConfig, transport::HttpTransport};
///
/// let transport = HttpTransport::with_config(&HttpConfig::default()).unwrap();
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    http_version: HttpVersion,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a transport with default settings.
    ///
    /// Default configuration:
    /// - Timeout: 30 seconds
    /// - Connect timeout: 10 seconds
    /// - HTTP version: Auto
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        if config.http_version == HttpVersion::Http1 {
            builder = builder.http1_only();
        }

        let client = builder.build().map_err(SmartwebError::HttpError)?;

        Ok(Self { client, http_version: config.http_version })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(operation = request.operation, bytes = request.body.len()))]
    async fn post<'a>(&'a self, request: SoapRequest<'a>) -> Result<TransportResponse> {
        let url = validate_endpoint(request.endpoint)
            .map_err(|e| SmartwebError::TransportError(e.to_string()))?;

        validate_header("SOAPAction", request.soap_action)?;
        let soap_action = HeaderValue::from_str(&format!("\"{}\"", request.soap_action))
            .map_err(|e| SmartwebError::TransportError(format!("invalid SOAPAction header: {e}")))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", soap_action)
            .body(request.body.to_vec())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(SmartwebError::HttpError)?.to_vec();

        debug!(status, bytes = body.len(), "received reply");

        Ok(TransportResponse { status, body })
    }

    fn protocol_name(&self) -> &'static str {
        match self.http_version {
            HttpVersion::Http1 => "http/1.1",
            HttpVersion::Auto => "http",
        }
    }
}
