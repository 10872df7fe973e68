//! Request envelope encoding.

use quick_xml::escape::escape;
use serde_json::Value;

use crate::params::Params;

const ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Encodes one operation call as a SOAP 1.1 envelope.
///
/// Top-level nil parameters are sent as `xsi:nil` elements; nulls inside records are left out so
/// an update only carries the fields the record actually holds. Lists become repeated `item`
/// elements.
///
/// # Examples
///
/// ```
/// use smartweb_client::{params::Params, soap::encode_request};
///
/// let xml = encode_request("urn:shop", "Product_GetById", &Params::new().with("ProductId", 42));
/// assert!(xml.contains("<ns1:Product_GetById><ProductId>42</ProductId></ns1:Product_GetById>"));
/// ```
#[must_use]
pub fn encode_request(namespace: &str, operation: &str, params: &Params) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str(r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV=""#);
    xml.push_str(ENVELOPE_NS);
    xml.push_str(r#"" xmlns:ns1=""#);
    xml.push_str(&escape(namespace));
    xml.push_str(r#"" xmlns:xsi=""#);
    xml.push_str(XSI_NS);
    xml.push_str(r#""><SOAP-ENV:Body>"#);

    xml.push_str("<ns1:");
    xml.push_str(operation);
    xml.push('>');
    for (name, value) in params.iter() {
        if value.is_null() {
            xml.push('<');
            xml.push_str(name);
            xml.push_str(r#" xsi:nil="true"/>"#);
        } else {
            write_element(&mut xml, name, value);
        }
    }
    xml.push_str("</ns1:");
    xml.push_str(operation);
    xml.push('>');

    xml.push_str("</SOAP-ENV:Body></SOAP-ENV:Envelope>");
    xml
}

/// Value of the `SOAPAction` header for an operation.
#[must_use]
pub fn soap_action(namespace: &str, operation: &str) -> String {
    format!("{namespace}{operation}")
}

fn write_element(xml: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Object(fields) if fields.len() == 1 && fields.contains_key("item") => {
            // A list as it was decoded from a reply: `{"item": [..]}` or `{"item": {..}}`.
            open(xml, name);
            match fields.get("item") {
                Some(Value::Array(items)) => {
                    for item in items {
                        write_element(xml, "item", item);
                    }
                }
                Some(item) => write_element(xml, "item", item),
                None => {}
            }
            close(xml, name);
        }
        Value::Object(fields) => {
            open(xml, name);
            for (key, field) in fields {
                write_element(xml, key, field);
            }
            close(xml, name);
        }
        Value::Array(items) => {
            open(xml, name);
            for item in items {
                write_element(xml, "item", item);
            }
            close(xml, name);
        }
        Value::Bool(flag) => leaf(xml, name, if *flag { "true" } else { "false" }),
        Value::Number(number) => leaf(xml, name, &number.to_string()),
        Value::String(text) => leaf(xml, name, &escape(text.as_str())),
    }
}

fn open(xml: &mut String, name: &str) {
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
}

fn close(xml: &mut String, name: &str) {
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
}

fn leaf(xml: &mut String, name: &str, text: &str) {
    open(xml, name);
    xml.push_str(text);
    close(xml, name);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_scalar_params() {
        let params = Params::new().with("Start", "2024-01-01").with("Status", "1,2");
        let xml = encode_request("http://api.hostedshop.dk/", "Order_GetByDate", &params);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns:ns1="http://api.hostedshop.dk/""#));
        assert!(xml.contains(
            "<ns1:Order_GetByDate><Start>2024-01-01</Start><Status>1,2</Status></ns1:Order_GetByDate>"
        ));
    }

    #[test]
    fn test_encode_nil_param() {
        let params = Params::new().with("UserId", 5).nil("Start");
        let xml = encode_request("urn:shop", "Order_GetByDateAndUser", &params);
        assert!(xml.contains(r#"<UserId>5</UserId><Start xsi:nil="true"/>"#));
    }

    #[test]
    fn test_encode_no_params() {
        let xml = encode_request("urn:shop", "Currency_GetAll", &Params::new());
        assert!(xml.contains("<ns1:Currency_GetAll></ns1:Currency_GetAll>"));
    }

    #[test]
    fn test_encode_record_skips_nulls() {
        let params = Params::new().with(
            "UserData",
            json!({"Id": 9, "Email": null, "Newsletter": false, "Firstname": "Ada"}),
        );
        let xml = encode_request("urn:shop", "User_Update", &params);

        assert!(xml.contains("<UserData><"));
        assert!(xml.contains("<Id>9</Id>"));
        assert!(xml.contains("<Newsletter>false</Newsletter>"));
        assert!(xml.contains("<Firstname>Ada</Firstname>"));
        assert!(!xml.contains("Email"));
    }

    #[test]
    fn test_encode_list_as_items() {
        let params = Params::new().with("ProductData", json!({"SecondaryCategoryIds": [3, 4]}));
        let xml = encode_request("urn:shop", "Product_Update", &params);
        assert!(xml.contains(
            "<SecondaryCategoryIds><item>3</item><item>4</item></SecondaryCategoryIds>"
        ));
    }

    #[test]
    fn test_encode_decoded_item_list_once() {
        let params = Params::new()
            .with("UserData", json!({"Id": 5, "InterestFields": {"item": ["3", "4"]}}));
        let xml = encode_request("urn:shop", "User_Update", &params);
        assert!(xml.contains("<InterestFields><item>3</item><item>4</item></InterestFields>"));
        assert!(!xml.contains("<item><item>"));
    }

    #[test]
    fn test_encode_decoded_single_item() {
        let params =
            Params::new().with("ProductData", json!({"Pictures": {"item": {"Id": "1"}}}));
        let xml = encode_request("urn:shop", "Product_Update", &params);
        assert!(xml.contains("<Pictures><item><Id>1</Id></item></Pictures>"));
    }

    #[test]
    fn test_encode_record_keeps_field_order() {
        let params = Params::new().with("ProductData", json!({"Title": "Mug", "Id": 7}));
        let xml = encode_request("urn:shop", "Product_Update", &params);
        assert!(xml.contains("<ProductData><Title>Mug</Title><Id>7</Id></ProductData>"));
    }

    #[test]
    fn test_encode_escapes_text() {
        let params = Params::new().with("Text", "Fish & <Chips>");
        let xml = encode_request("urn:shop", "Order_UpdateComment", &params);
        assert!(xml.contains("<Text>Fish &amp; &lt;Chips&gt;</Text>"));
    }

    #[test]
    fn test_soap_action() {
        assert_eq!(
            soap_action("http://api.hostedshop.dk/", "Product_GetAll"),
            "http://api.hostedshop.dk/Product_GetAll"
        );
    }
}
