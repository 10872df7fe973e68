//! SOAP 1.1 envelope codec.
//!
//! Requests are encoded as RPC calls in the service namespace. Replies are decoded into a
//! [`serde_json::Value`] tree; see [`decode_response`] for the mapping rules.

mod decode;
mod encode;

pub use decode::decode_response;
pub use encode::{encode_request, soap_action};
