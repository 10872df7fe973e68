//! Integration tests for the SOAP codec and reply normalization.
//!
//! These drive the public pieces the client is built from: encode a request, decode a reply
//! envelope, normalize it into a payload and decode records.

use serde_json::json;
use smartweb_client::{
    Payload, SmartwebError,
    models::{Order, Product, Record, User},
    params::Params,
    soap::{decode_response, encode_request, soap_action},
};

const NAMESPACE: &str = "http://api.hostedshop.dk/";

fn envelope(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:ns1="http://api.hostedshop.dk/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
            r#"xmlns:SOAP-ENC="http://schemas.xmlsoap.org/soap/encoding/">"#,
            "<SOAP-ENV:Body>{}</SOAP-ENV:Body></SOAP-ENV:Envelope>"
        ),
        body
    )
}

fn payload(operation: &str, xml: &str) -> Payload {
    let response = decode_response(&envelope(xml)).expect("should decode envelope");
    Payload::from_response(operation, response)
}

#[test]
fn test_request_envelope() {
    let params = Params::new()
        .with("OrderId", 9)
        .with("Text", "Ships <today> & tomorrow")
        .nil("Start");

    let xml = encode_request(NAMESPACE, "Order_UpdateComment", &params);

    assert!(xml.contains("<SOAP-ENV:Body><ns1:Order_UpdateComment>"));
    assert!(xml.contains("<OrderId>9</OrderId>"));
    assert!(xml.contains("<Text>Ships &lt;today&gt; &amp; tomorrow</Text>"));
    assert!(xml.contains(r#"<Start xsi:nil="true"/>"#));
    assert_eq!(soap_action(NAMESPACE, "Order_UpdateComment"), "http://api.hostedshop.dk/Order_UpdateComment");
}

#[test]
fn test_record_parameter_nests_fields() {
    let user = User { id: Some(4), newsletter: Some(false), ..User::default() };
    let params = Params::new().with_record("UserData", &user).expect("should serialize");

    let xml = encode_request(NAMESPACE, "User_Update", &params);

    assert!(xml.contains("<UserData>"));
    assert!(xml.contains("<Id>4</Id>"));
    assert!(xml.contains("<Newsletter>false</Newsletter>"));
    assert!(!xml.contains("<Email"));
}

#[test]
fn test_single_record_reply() {
    let reply = payload(
        "Product_GetById",
        "<ns1:Product_GetByIdResponse><Product_GetByIdResult>\
         <Id xsi:type=\"xsd:int\">42</Id><Title xsi:type=\"xsd:string\">Widget</Title>\
         </Product_GetByIdResult></ns1:Product_GetByIdResponse>",
    );

    let Payload::Single(value) = reply else {
        panic!("expected a single record");
    };
    let product = Product::from_value(value).expect("should decode product");
    assert_eq!(product.id(), Some(42));
    assert_eq!(product.title.as_deref(), Some("Widget"));
}

#[test]
fn test_one_item_list_reply_is_collection() {
    let reply = payload(
        "Order_GetByDate",
        "<ns1:Order_GetByDateResponse><Order_GetByDateResult>\
         <item><Id>1</Id></item>\
         </Order_GetByDateResult></ns1:Order_GetByDateResponse>",
    );
    assert_eq!(reply, Payload::Collection(vec![json!({"Id": "1"})]));
}

#[test]
fn test_encoded_array_reply_is_collection() {
    let reply = payload(
        "User_GetAll",
        "<ns1:User_GetAllResponse>\
         <User_GetAllResult SOAP-ENC:arrayType=\"ns1:User[1]\" xsi:type=\"ns1:ArrayOfUser\">\
         <item><Id xsi:type=\"xsd:int\">3</Id></item>\
         </User_GetAllResult></ns1:User_GetAllResponse>",
    );

    let users: Vec<User> = reply
        .into_vec()
        .into_iter()
        .map(User::from_value)
        .collect::<Result<_, _>>()
        .expect("should decode users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, Some(3));
}

#[test]
fn test_boolean_reply() {
    let reply = payload(
        "Order_UpdateStatus",
        "<ns1:Order_UpdateStatusResponse>\
         <Order_UpdateStatusResult xsi:type=\"xsd:boolean\">true</Order_UpdateStatusResult>\
         </ns1:Order_UpdateStatusResponse>",
    );
    assert_eq!(reply.as_bool(), Some(true));
}

#[test]
fn test_void_reply_is_empty() {
    let reply = payload("Order_Create", "<ns1:Order_CreateResponse/>");
    assert!(reply.is_empty());
}

#[test]
fn test_fault_reply() {
    let result = decode_response(&envelope(
        "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode>\
         <faultstring>Access denied</faultstring></SOAP-ENV:Fault>",
    ));

    let Err(SmartwebError::RemoteFault { code, message }) = result else {
        panic!("expected RemoteFault");
    };
    assert_eq!(code, "SOAP-ENV:Client");
    assert_eq!(message, "Access denied");
}

#[test]
fn test_order_lines_single_or_list() {
    let one = Order::from_value(json!({"Id": "1", "OrderLines": {"item": {"Id": "10"}}}))
        .expect("should decode order");
    let two = Order::from_value(json!({
        "Id": "2",
        "OrderLines": {"item": [{"Id": "10"}, {"Id": "11"}]}
    }))
    .expect("should decode order");

    assert_eq!(one.order_lines.len(), 1);
    assert_eq!(two.order_lines.len(), 2);
    assert_eq!(two.order_lines[1].id, Some(11));
}

#[test]
fn test_fetched_product_resubmits_nested_lists() {
    let reply = payload(
        "Product_GetById",
        "<ns1:Product_GetByIdResponse><Product_GetByIdResult>\
         <Id>42</Id><Title>Widget</Title>\
         <Pictures><item><Id>1</Id><FileName>a.jpg</FileName></item>\
         <item><Id>2</Id><FileName>b.jpg</FileName></item></Pictures>\
         <Tags><item>red</item><item>sale</item></Tags>\
         </Product_GetByIdResult></ns1:Product_GetByIdResponse>",
    );
    let Payload::Single(value) = reply else {
        panic!("expected a single record");
    };
    let product = Product::from_value(value).expect("should decode product");

    let params = Params::new().with_record("ProductData", &product).expect("should serialize");
    let xml = encode_request(NAMESPACE, "Product_Update", &params);

    assert!(xml.contains(
        "<Pictures><item><Id>1</Id><FileName>a.jpg</FileName></item>\
         <item><Id>2</Id><FileName>b.jpg</FileName></item></Pictures>"
    ));
    assert!(xml.contains("<Tags><item>red</item><item>sale</item></Tags>"));
    assert!(!xml.contains("<item><item>"));
}

#[test]
fn test_fetched_user_resubmits_nested_lists() {
    let reply = payload(
        "User_GetById",
        "<ns1:User_GetByIdResponse><User_GetByIdResult>\
         <Id>5</Id><InterestFields><item>3</item><item>4</item></InterestFields>\
         </User_GetByIdResult></ns1:User_GetByIdResponse>",
    );
    let Payload::Single(value) = reply else {
        panic!("expected a single record");
    };
    let user = User::from_value(value).expect("should decode user");

    let params = Params::new().with_record("UserData", &user).expect("should serialize");
    let xml = encode_request(NAMESPACE, "User_Update", &params);

    assert!(xml.contains(
        "<UserData><Id>5</Id><InterestFields><item>3</item><item>4</item></InterestFields>"
    ));
}
