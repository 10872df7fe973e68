//! Scripted transport for facade tests.

use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
};

use crate::{
    error::{Result, SmartwebError},
    transport::{SoapRequest, Transport, TransportResponse, sealed},
};

/// A request as the scripted transport saw it.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub operation: String,
    pub soap_action: String,
    pub body: String,
}

/// Replays queued replies in order and records every request.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<TransportResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl sealed::private::Sealed for ScriptedTransport {}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a 200 reply whose body element is `<{operation}Response>{inner}</...>`.
    pub(crate) fn reply(self, operation: &str, inner: &str) -> Self {
        self.raw(200, &envelope(&format!("<ns1:{operation}Response>{inner}</ns1:{operation}Response>")))
    }

    /// Queues a reply carrying `<{operation}Result>{result}</...>`.
    pub(crate) fn result(self, operation: &str, result: &str) -> Self {
        self.reply(operation, &format!("<{operation}Result>{result}</{operation}Result>"))
    }

    /// Queues a SOAP fault.
    pub(crate) fn fault(self, code: &str, message: &str) -> Self {
        self.raw(
            500,
            &envelope(&format!(
                "<SOAP-ENV:Fault><faultcode>{code}</faultcode><faultstring>{message}</faultstring></SOAP-ENV:Fault>"
            )),
        )
    }

    pub(crate) fn raw(self, status: u16, body: &str) -> Self {
        self.raw_bytes(status, body.as_bytes().to_vec())
    }

    pub(crate) fn raw_bytes(self, status: u16, body: Vec<u8>) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(TransportResponse { status, body });
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn operations(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.operation).collect()
    }

    pub(crate) fn last_body(&self) -> String {
        self.calls().last().map(|call| call.body.clone()).unwrap_or_default()
    }
}

impl Transport for ScriptedTransport {
    async fn post<'a>(&'a self, request: SoapRequest<'a>) -> Result<TransportResponse> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(RecordedCall {
            operation: request.operation.to_owned(),
            soap_action: request.soap_action.to_owned(),
            body: String::from_utf8_lossy(request.body).into_owned(),
        });

        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| {
                SmartwebError::TransportError(format!("no scripted reply for {}", request.operation))
            })
    }

    fn protocol_name(&self) -> &'static str {
        "scripted"
    }
}

/// Wraps body content in a SOAP 1.1 envelope.
pub(crate) fn envelope(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:ns1="http://api.hostedshop.dk/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
            "<SOAP-ENV:Body>{}</SOAP-ENV:Body></SOAP-ENV:Envelope>"
        ),
        body
    )
}
