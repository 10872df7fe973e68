//! Page text record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A content page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct PageText {
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub headline: Option<String>,
    pub language_access: Option<Value>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub link: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub parent_id: Option<i64>,
    pub pictures: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_keywords: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub seo_title: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub show_in_menu: Option<bool>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub sorting: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub target: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub text2: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub text3: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub updated_date: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub visible: Option<bool>,
}

impl Record for PageText {
    const NAME: &'static str = "PageText";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
