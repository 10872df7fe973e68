//! Site and SEO redirect records.

use serde::{Deserialize, Serialize};

use super::{Record, de};

/// A storefront site (language and currency pair).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Site {
    /// Site id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Site name.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Site language.
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    /// Default currency.
    #[serde(deserialize_with = "de::opt_i64")]
    pub currency_id: Option<i64>,
}

impl Record for Site {
    const NAME: &'static str = "Site";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A permanent URL redirect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SeoRedirect {
    /// Redirect id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Path being redirected.
    #[serde(deserialize_with = "de::opt_string")]
    pub old_url: Option<String>,
    /// Redirect target.
    #[serde(deserialize_with = "de::opt_string")]
    pub new_url: Option<String>,
    /// Language the redirect applies to.
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
}

impl Record for SeoRedirect {
    const NAME: &'static str = "SeoRedirect";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_seo_redirect_round_trip_names() {
        let redirect = SeoRedirect {
            id: Some(4),
            old_url: Some("/old".to_owned()),
            new_url: Some("/new".to_owned()),
            language_iso: Some("DA".to_owned()),
        };

        let value = serde_json::to_value(&redirect).unwrap();
        assert_eq!(value, json!({"Id": 4, "OldUrl": "/old", "NewUrl": "/new", "LanguageISO": "DA"}));
        assert_eq!(SeoRedirect::from_value(value).unwrap(), redirect);
    }
}
