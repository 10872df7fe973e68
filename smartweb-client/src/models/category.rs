//! Category record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct Category {
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description_bottom: Option<String>,
    /// Category id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    pub language_access: Option<Value>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    /// Parent category, `0` for top level.
    #[serde(deserialize_with = "de::opt_i64")]
    pub parent_id: Option<i64>,
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
    #[serde(deserialize_with = "de::opt_bool")]
    pub status: Option<bool>,
    /// Display title.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::id_list", skip_serializing_if = "Vec::is_empty")]
    pub user_group_access_ids: Vec<i64>,
}

impl Record for Category {
    const NAME: &'static str = "Category";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
