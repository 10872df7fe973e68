//! Transport abstraction for SOAP calls.
//!
//! The transport moves one encoded SOAP envelope to the remote service and hands back the raw
//! reply. It knows nothing about operations or records:
//! - **Transport**: protocol mechanics (HTTP POST, headers, session cookies, timeouts)
//! - **`soap`**: envelope encoding and decoding
//! - **`SmartwebClient`**: operation names, parameters, records
//!
//! # Examples
//!
//! ```rust,no_run
//! use smartweb_client::transport::{HttpTransport, SoapRequest, Transport};
//!
//! # async fn example() -> smartweb_client::error::Result<()> {
//! let transport = HttpTransport::new()?;
//!
//! let request = SoapRequest {
//!     endpoint: "https://api.hostedshop.dk/service.php",
//!     soap_action: "http://api.hostedshop.dk/Currency_GetAll",
//!     operation: "Currency_GetAll",
//!     body: b"<SOAP-ENV:Envelope>...</SOAP-ENV:Envelope>",
//! };
//!
//! let response = transport.post(request).await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use crate::error::Result;

pub mod http;
mod sealed;
#[cfg(test)]
pub(crate) mod testing;

pub use http::HttpTransport;

/// One SOAP call ready to be sent.
#[derive(Debug, Clone, Copy)]
pub struct SoapRequest<'a> {
    /// Service endpoint URL.
    pub endpoint: &'a str,
    /// Value of the `SOAPAction` header (without quotes).
    pub soap_action: &'a str,
    /// Remote operation name, for logging.
    pub operation: &'a str,
    /// Encoded envelope.
    pub body: &'a [u8],
}

/// Raw reply from the remote service.
///
/// SOAP faults arrive with a non-success status and a fault envelope, so the transport returns
/// every reply it receives and leaves interpretation to the caller.
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// SOAP transport.
///
/// This trait is sealed; [`HttpTransport`] is the production implementation.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Posts one envelope and returns the reply, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent or the body cannot be read.
    fn post<'a>(
        &'a self,
        request: SoapRequest<'a>,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Returns the protocol name for logging.
    fn protocol_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_response_success_range() {
        assert!(TransportResponse { status: 200, body: vec![] }.is_success());
        assert!(TransportResponse { status: 204, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 500, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 302, body: vec![] }.is_success());
    }

    #[test]
    fn test_soap_request_debug() {
        let request = SoapRequest {
            endpoint: "https://api.example.com/service.php",
            soap_action: "urn:shop/Product_GetAll",
            operation: "Product_GetAll",
            body: b"<x/>",
        };

        let debug_str = format!("{request:?}");
        assert!(debug_str.contains("SoapRequest"));
        assert!(debug_str.contains("Product_GetAll"));
    }
}
