//! Response envelope decoding.
//!
//! Replies are turned into a [`serde_json::Value`] tree so records can be read with serde:
//!
//! - elements with children become objects; a child name seen more than once becomes an array
//! - elements typed as SOAP arrays always become arrays, whatever their child names
//! - `xsd:int` family leaves become numbers and `xsd:boolean` leaves become booleans
//! - every other leaf is kept as its exact text
//! - `xsi:nil` and empty untyped leaves become null

use std::{collections::HashMap, fmt::Display};

use quick_xml::{Reader, events::BytesStart, events::Event};
use serde_json::{Map, Value};

use crate::error::{Result, SmartwebError};

fn malformed(e: impl Display) -> SmartwebError {
    SmartwebError::MalformedResponse(e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Untyped,
    Array,
    Int,
    Bool,
    Str,
    Other,
}

impl Kind {
    fn from_xsi_type(type_name: &str) -> Self {
        let local = type_name.rsplit(':').next().unwrap_or(type_name);
        match local {
            "int" | "integer" | "long" | "short" | "byte" | "unsignedInt" | "unsignedLong"
            | "unsignedShort" | "unsignedByte" | "nonNegativeInteger" | "positiveInteger" => {
                Self::Int
            }
            "boolean" => Self::Bool,
            "string" => Self::Str,
            l if l.ends_with("Array") || l.starts_with("ArrayOf") => Self::Array,
            _ => Self::Other,
        }
    }
}

#[derive(Debug)]
struct Frame {
    name: String,
    kind: Kind,
    nil: bool,
    text: String,
    children: Vec<(String, Value)>,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut kind = Kind::Untyped;
        let mut nil = false;

        for attr in start.attributes() {
            let attr = attr.map_err(malformed)?;
            let value = attr.unescape_value().map_err(malformed)?;
            match attr.key.local_name().as_ref() {
                b"type" if kind != Kind::Array => kind = Kind::from_xsi_type(&value),
                b"arrayType" => kind = Kind::Array,
                b"nil" => nil = value == "true" || value == "1",
                _ => {}
            }
        }

        Ok(Self { name, kind, nil, text: String::new(), children: Vec::new() })
    }

    fn finish(self) -> Value {
        if self.nil {
            return Value::Null;
        }
        if self.kind == Kind::Array {
            return Value::Array(self.children.into_iter().map(|(_, value)| value).collect());
        }
        if !self.children.is_empty() {
            return group(self.children);
        }

        let text = self.text;
        match self.kind {
            Kind::Int => match text.trim().parse::<i64>() {
                Ok(number) => Value::from(number),
                Err(_) if text.is_empty() => Value::Null,
                Err(_) => Value::String(text),
            },
            Kind::Bool => match text.trim() {
                "true" | "1" => Value::Bool(true),
                "false" | "0" => Value::Bool(false),
                "" => Value::Null,
                _ => Value::String(text),
            },
            Kind::Str => Value::String(text),
            Kind::Untyped | Kind::Other | Kind::Array => {
                if text.is_empty() {
                    Value::Null
                } else {
                    Value::String(text)
                }
            }
        }
    }
}

fn group(children: Vec<(String, Value)>) -> Value {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (name, _) in &children {
        *counts.entry(name.clone()).or_default() += 1;
    }

    let mut map = Map::new();
    for (name, value) in children {
        if counts.get(&name).copied().unwrap_or(0) > 1 {
            if let Value::Array(items) = map.entry(name).or_insert_with(|| Value::Array(Vec::new()))
            {
                items.push(value);
            }
        } else {
            map.insert(name, value);
        }
    }
    Value::Object(map)
}

fn close(stack: &mut Vec<Frame>, frame: Frame) -> Option<(String, Value)> {
    let name = frame.name.clone();
    let value = frame.finish();
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push((name, value));
            None
        }
        None => Some((name, value)),
    }
}

/// Parses an XML document into its root element's local name and value.
fn decode_document(xml: &str) -> Result<(String, Value)> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let frame = Frame::open(&start)?;
                if let Some(root) = close(&mut stack, frame) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| malformed("unbalanced end tag"))?;
                if let Some(root) = close(&mut stack, frame) {
                    return Ok(root);
                }
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text.unescape().map_err(malformed)?);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => return Err(malformed("unexpected end of document")),
            _ => {}
        }
    }
}

/// Decodes a SOAP reply into the value of its response element.
///
/// A `Fault` in the body is returned as [`SmartwebError::RemoteFault`]. A response element
/// without content decodes to [`Value::Null`].
///
/// # Errors
///
/// - `SmartwebError::RemoteFault` if the body carries a SOAP fault
/// - `SmartwebError::MalformedResponse` if the document is not a SOAP envelope
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use smartweb_client::soap::decode_response;
///
/// let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
///   <SOAP-ENV:Body><ns1:Product_GetByIdResponse xmlns:ns1="urn:shop">
///     <Product_GetByIdResult><Id>42</Id></Product_GetByIdResult>
///   </ns1:Product_GetByIdResponse></SOAP-ENV:Body></SOAP-ENV:Envelope>"#;
///
/// let value = decode_response(xml).unwrap();
/// assert_eq!(value, json!({"Product_GetByIdResult": {"Id": "42"}}));
/// ```
pub fn decode_response(xml: &str) -> Result<Value> {
    let (root, envelope) = decode_document(xml)?;
    if root != "Envelope" {
        return Err(malformed(format!("expected SOAP Envelope, found {root}")));
    }

    let Value::Object(mut envelope) = envelope else {
        return Err(malformed("empty SOAP envelope"));
    };
    let Some(Value::Object(mut body)) = envelope.remove("Body") else {
        return Err(malformed("SOAP envelope has no Body"));
    };

    if let Some(fault) = body.remove("Fault") {
        return Err(fault_error(&fault));
    }

    let key = body
        .keys()
        .find(|key| key.ends_with("Response"))
        .or_else(|| body.keys().next())
        .cloned()
        .ok_or_else(|| malformed("empty SOAP Body"))?;

    Ok(body.remove(&key).unwrap_or(Value::Null))
}

fn fault_error(fault: &Value) -> SmartwebError {
    let field = |name: &str| fault.get(name).and_then(Value::as_str).unwrap_or_default().to_owned();
    SmartwebError::RemoteFault { code: field("faultcode"), message: field("faultstring") }
}
