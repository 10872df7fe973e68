//! Response normalization.
//!
//! The remote service wraps every result in `<Operation>Result`, returns collections as an
//! `item` wrapper, and returns a lone record unwrapped when a list query matches exactly one
//! row. [`Payload`] resolves that once so callers only deal with three shapes.

use serde_json::Value;

use crate::error::{Result, SmartwebError};

/// Normalized result of one remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No result: missing, nil, or an empty element.
    Empty,
    /// One value: a record, a scalar or a boolean.
    Single(Value),
    /// Zero or more values in remote order.
    Collection(Vec<Value>),
}

impl Payload {
    /// Extracts and normalizes `<operation>Result` from a decoded response element.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use smartweb_client::payload::Payload;
    ///
    /// let response = json!({"User_GetAllResult": {"item": {"Id": 1}}});
    /// let payload = Payload::from_response("User_GetAll", response);
    /// assert_eq!(payload, Payload::Collection(vec![json!({"Id": 1})]));
    ///
    /// let response = json!({"Product_UpdateResult": 42});
    /// assert_eq!(Payload::from_response("Product_Update", response).as_id(), Some(42));
    /// ```
    #[must_use]
    pub fn from_response(operation: &str, response: Value) -> Self {
        let result = match response {
            Value::Object(mut fields) => fields.remove(&format!("{operation}Result")),
            _ => None,
        };
        result.map_or(Self::Empty, Self::from_result)
    }

    /// Normalizes an already unwrapped result value.
    #[must_use]
    pub fn from_result(result: Value) -> Self {
        match result {
            Value::Null => Self::Empty,
            Value::String(text) if text.is_empty() => Self::Empty,
            Value::Array(items) => Self::Collection(items),
            Value::Object(mut fields) => {
                if fields.is_empty() {
                    return Self::Empty;
                }
                match fields.remove("item") {
                    Some(Value::Array(items)) => Self::Collection(items),
                    Some(Value::Null) => Self::Collection(Vec::new()),
                    Some(item) => Self::Collection(vec![item]),
                    None => Self::Single(Value::Object(fields)),
                }
            }
            other => Self::Single(other),
        }
    }

    /// Returns true for [`Payload::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the payload as a list, treating a lone value as a one-element list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(value) => vec![value],
            Self::Collection(items) => items,
        }
    }

    /// Returns the payload as one value, taking the element of a one-element collection.
    ///
    /// Returns `None` for [`Payload::Empty`] and for collections of any other length.
    #[must_use]
    pub fn into_single(self) -> Option<Value> {
        match self {
            Self::Empty => None,
            Self::Single(value) => Some(value),
            Self::Collection(mut items) => {
                if items.len() == 1 {
                    items.pop()
                } else {
                    None
                }
            }
        }
    }

    /// Returns the payload as a JSON value: null, the value, or an array.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Single(value) => value,
            Self::Collection(items) => Value::Array(items),
        }
    }

    /// Interprets a scalar reply as a boolean confirmation.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Single(Value::Bool(flag)) => Some(*flag),
            Self::Single(Value::Number(number)) => number.as_i64().map(|n| n != 0),
            Self::Single(Value::String(text)) => match text.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Interprets a scalar reply as a record id, as returned by create operations.
    #[must_use]
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Single(Value::Number(number)) => number.as_i64(),
            Self::Single(Value::String(text)) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns true when the reply is a truthy confirmation.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    /// Returns the boolean reply, failing on any other shape.
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::MalformedResponse` if the reply is not a boolean.
    pub fn expect_bool(&self, operation: &str) -> Result<bool> {
        self.as_bool().ok_or_else(|| {
            SmartwebError::MalformedResponse(format!("{operation}: expected a boolean reply"))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_result_is_empty() {
        assert!(Payload::from_response("Product_GetAll", json!({})).is_empty());
        assert!(Payload::from_response("Product_GetAll", Value::Null).is_empty());
        assert!(
            Payload::from_response("Product_GetAll", json!({"Other_GetAllResult": 1})).is_empty()
        );
    }

    #[test]
    fn test_nil_and_empty_results() {
        assert_eq!(Payload::from_result(Value::Null), Payload::Empty);
        assert_eq!(Payload::from_result(json!("")), Payload::Empty);
        assert_eq!(Payload::from_result(json!({})), Payload::Empty);
    }

    #[test]
    fn test_item_wrapper_list() {
        let payload = Payload::from_result(json!({"item": [{"Id": 1}, {"Id": 2}]}));
        assert_eq!(payload, Payload::Collection(vec![json!({"Id": 1}), json!({"Id": 2})]));
    }

    #[test]
    fn test_item_wrapper_single_is_collection() {
        let payload = Payload::from_result(json!({"item": {"Id": 1}}));
        assert_eq!(payload.clone().into_vec(), vec![json!({"Id": 1})]);
        assert_eq!(payload.into_single(), Some(json!({"Id": 1})));
    }

    #[test]
    fn test_item_wrapper_nil_is_empty_collection() {
        assert_eq!(Payload::from_result(json!({"item": null})), Payload::Collection(vec![]));
    }

    #[test]
    fn test_bare_array_is_collection() {
        assert_eq!(Payload::from_result(json!([1, 2])), Payload::Collection(vec![json!(1), json!(2)]));
    }

    #[test]
    fn test_lone_record_is_single() {
        let payload = Payload::from_response(
            "Order_GetByDate",
            json!({"Order_GetByDateResult": {"Id": 5, "Status": 2}}),
        );
        assert_eq!(payload, Payload::Single(json!({"Id": 5, "Status": 2})));
        assert_eq!(payload.into_vec(), vec![json!({"Id": 5, "Status": 2})]);
    }

    #[test]
    fn test_into_single_rejects_many() {
        let payload = Payload::Collection(vec![json!(1), json!(2)]);
        assert_eq!(payload.into_single(), None);
        assert_eq!(Payload::Empty.into_single(), None);
    }

    #[test]
    fn test_into_value() {
        assert_eq!(Payload::Empty.into_value(), Value::Null);
        assert_eq!(Payload::Single(json!(true)).into_value(), json!(true));
        assert_eq!(Payload::Collection(vec![json!(1)]).into_value(), json!([1]));
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Payload::Single(json!(true)).as_bool(), Some(true));
        assert_eq!(Payload::Single(json!("false")).as_bool(), Some(false));
        assert_eq!(Payload::Single(json!(1)).as_bool(), Some(true));
        assert_eq!(Payload::Single(json!({"Id": 1})).as_bool(), None);
        assert_eq!(Payload::Empty.as_bool(), None);
        assert!(!Payload::Empty.is_confirmed());
    }

    #[test]
    fn test_as_id() {
        assert_eq!(Payload::Single(json!(17)).as_id(), Some(17));
        assert_eq!(Payload::Single(json!("18")).as_id(), Some(18));
        assert_eq!(Payload::Single(json!(false)).as_id(), None);
    }

    #[test]
    fn test_expect_bool() {
        assert!(Payload::Single(json!(true)).expect_bool("Solution_Connect").unwrap());
        assert!(matches!(
            Payload::Empty.expect_bool("Solution_Connect"),
            Err(SmartwebError::MalformedResponse(_))
        ));
    }
}
