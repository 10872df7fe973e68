//! Remote call parameters.
//!
//! Every remote operation takes a flat, ordered name→value map. [`Params`] builds that map and
//! applies the formatting the remote service expects: dates as `YYYY-MM-DD`, timestamps as
//! `YYYY-MM-DD HH:MM:SS`, id and status lists comma-joined, records serialized under their
//! remote field names.

use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SmartwebError};

/// Date format used by date-filtered operations.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used by update-date filtered operations.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered parameter map for one remote call.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use smartweb_client::params::Params;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let params = Params::new()
///     .with_date("Start", start)
///     .with_list("Status", [1, 2, 3]);
///
/// assert_eq!(params.get("Start").unwrap(), "2024-01-01");
/// assert_eq!(params.get("Status").unwrap(), "1,2,3");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, Value)>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar parameter. `None` is sent as nil.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    /// Adds an explicit nil parameter.
    #[must_use]
    pub fn nil(self, name: &'static str) -> Self {
        self.with(name, Value::Null)
    }

    /// Adds a date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn with_date(self, name: &'static str, date: NaiveDate) -> Self {
        self.with(name, date.format(DATE_FORMAT).to_string())
    }

    /// Adds an optional timestamp formatted as `YYYY-MM-DD HH:MM:SS`; `None` is sent as nil.
    #[must_use]
    pub fn with_datetime(self, name: &'static str, timestamp: Option<NaiveDateTime>) -> Self {
        self.with(name, timestamp.map(|t| t.format(DATETIME_FORMAT).to_string()))
    }

    /// Adds a comma-joined list.
    #[must_use]
    pub fn with_list<I>(self, name: &'static str, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let joined = items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>().join(",");
        self.with(name, joined)
    }

    /// Adds a record serialized under its remote field names, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::InvalidInput` if the record cannot be serialized.
    pub fn with_record<R: Serialize>(self, name: &'static str, record: &R) -> Result<Self> {
        let value = serde_json::to_value(record)
            .map_err(|e| SmartwebError::InvalidInput(format!("cannot serialize {name}: {e}")))?;
        Ok(self.with(name, value))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_params_keep_insertion_order() {
        let params = Params::new().with("B", 1).with("A", 2);
        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_with_option_none_is_null() {
        let params = Params::new().with("End", None::<String>);
        assert_eq!(params.get("End"), Some(&Value::Null));
    }

    #[test]
    fn test_with_datetime_formats() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 4, 5)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(6, 7, 8).unwrap());
        let params = Params::new().with_datetime("Start", Some(timestamp)).with_datetime("End", None);
        assert_eq!(params.get("Start"), Some(&json!("2023-04-05 06:07:08")));
        assert_eq!(params.get("End"), Some(&Value::Null));
    }

    #[test]
    fn test_with_list_single_and_empty() {
        let params = Params::new().with_list("Ids", [7]).with_list("None", Vec::<i64>::new());
        assert_eq!(params.get("Ids"), Some(&json!("7")));
        assert_eq!(params.get("None"), Some(&json!("")));
    }

    #[test]
    fn test_with_record() {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Data {
            id: i64,
            title: Option<String>,
        }

        let params = Params::new().with_record("ProductData", &Data { id: 3, title: None }).unwrap();
        assert_eq!(params.get("ProductData"), Some(&json!({"Id": 3, "Title": null})));
    }

    #[test]
    fn test_with_record_keeps_declaration_order() {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Data {
            title: &'static str,
            id: i64,
        }

        let params = Params::new().with_record("ProductData", &Data { title: "Mug", id: 3 }).unwrap();
        let Some(Value::Object(fields)) = params.get("ProductData") else {
            panic!("record is not an object");
        };
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["Title", "Id"]);
    }

    #[test]
    fn test_get_missing() {
        assert!(Params::new().get("Missing").is_none());
        assert!(Params::new().is_empty());
    }
}
