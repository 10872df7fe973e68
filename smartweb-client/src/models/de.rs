//! Lenient field decoders.
//!
//! Untyped reply elements arrive as text, typed ones as numbers or booleans, and nested
//! collections arrive either bare, as an `item` wrapper around one record, or as an `item`
//! wrapper around a list. These decoders accept every shape the service produces for a field and
//! reject values of the wrong kind.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error},
};
use serde_json::Value;

fn parse_i64<E: Error>(value: &Value) -> Result<Option<i64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("expected an integer, found {number}"))),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            if let Ok(number) = text.parse::<i64>() {
                return Ok(Some(number));
            }
            // Integral values are sometimes sent with a decimal part, e.g. "10.00".
            Decimal::from_str(text)
                .ok()
                .filter(|d| d.fract().is_zero())
                .and_then(|d| i64::try_from(d).ok())
                .map(Some)
                .ok_or_else(|| E::custom(format!("expected an integer, found {text:?}")))
        }
        other => Err(E::custom(format!("expected an integer, found {other}"))),
    }
}

/// Optional integer from a number or numeric text.
pub(crate) fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    parse_i64(&value)
}

/// Optional boolean from a boolean, `0`/`1`, or `"true"`/`"false"`.
pub(crate) fn opt_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(flag)),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(D::Error::custom(format!("expected a boolean, found {number}"))),
        },
        Value::String(text) => match text.trim() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("expected a boolean, found {other:?}"))),
        },
        other => Err(D::Error::custom(format!("expected a boolean, found {other}"))),
    }
}

/// Optional decimal from a number or numeric text.
pub(crate) fn opt_decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    let text = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => return Err(D::Error::custom(format!("expected a decimal, found {other}"))),
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid decimal {text:?}: {e}")))
}

/// Optional text from any scalar.
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        other => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

fn collect_ids<E: Error>(value: &Value, ids: &mut Vec<i64>) -> Result<(), E> {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                collect_ids(item, ids)?;
            }
        }
        Value::Object(fields) => match fields.get("item") {
            Some(item) => collect_ids(item, ids)?,
            None if fields.is_empty() => {}
            None => return Err(E::custom("expected a list of ids, found a record")),
        },
        Value::String(text) if text.contains(',') => {
            for part in text.split(',') {
                if let Some(id) = parse_i64::<E>(&Value::String(part.to_owned()))? {
                    ids.push(id);
                }
            }
        }
        scalar => {
            if let Some(id) = parse_i64::<E>(scalar)? {
                ids.push(id);
            }
        }
    }
    Ok(())
}

/// Id list from a bare list, an `item` wrapper, comma-joined text, or a lone id.
pub(crate) fn id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let mut ids = Vec::new();
    collect_ids::<D::Error>(&value, &mut ids)?;
    Ok(ids)
}

fn unwrap_item(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(mut fields) => {
            if fields.is_empty() {
                return None;
            }
            if fields.len() == 1 && fields.contains_key("item") {
                return fields.remove("item").filter(|item| !item.is_null());
            }
            Some(Value::Object(fields))
        }
        other => Some(other),
    }
}

/// Record list from a bare list, an `item` wrapper around one record or a list, or a lone record.
pub(crate) fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = match unwrap_item(Value::deserialize(deserializer)?) {
        None => Vec::new(),
        Some(Value::Array(values)) => values,
        Some(value) => vec![value],
    };
    values
        .into_iter()
        .filter(|value| !value.is_null())
        .map(|value| serde_json::from_value(value).map_err(D::Error::custom))
        .collect()
}

/// Optional record, bare or inside an `item` wrapper.
pub(crate) fn single_item<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match unwrap_item(Value::deserialize(deserializer)?) {
        None => Ok(None),
        Some(Value::Array(mut values)) if values.len() == 1 => {
            serde_json::from_value(values.remove(0)).map(Some).map_err(D::Error::custom)
        }
        Some(Value::Array(values)) => {
            Err(D::Error::custom(format!("expected one record, found {}", values.len())))
        }
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}
