//! User records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Record, de};

/// A shop customer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(missing_docs, reason = "fields mirror the remote schema one to one")]
pub struct User {
    #[serde(deserialize_with = "de::opt_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub address2: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub approved: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub birth_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub consent: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub consent_date: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub currency: Option<String>,
    pub custom_data: Option<Value>,
    #[serde(deserialize_with = "de::opt_string")]
    pub cvr: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_created: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub date_updated: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub discount_group_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub ean: Option<String>,
    /// Login and contact email.
    #[serde(deserialize_with = "de::opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub fax: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub firstname: Option<String>,
    /// User id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    pub interest_fields: Option<Value>,
    pub language_access: Option<Value>,
    #[serde(rename = "LanguageISO", deserialize_with = "de::opt_string")]
    pub language_iso: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub lastname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub mobile: Option<String>,
    /// Newsletter subscription flag.
    #[serde(deserialize_with = "de::opt_bool")]
    pub newsletter: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub referer: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub sex: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_address: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_address2: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_company: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_country_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_cvr: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_ean: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_email: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_firstname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_lastname: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_mobile: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_phone: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_reference_number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_state: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub shipping_zip: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub site: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub r#type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub url: Option<String>,
    /// Customer group.
    #[serde(deserialize_with = "de::opt_i64")]
    pub user_group_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub zip: Option<String>,
}

impl Record for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A customer group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserGroup {
    /// User group id.
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    /// Group name.
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Discount group applied to members.
    #[serde(deserialize_with = "de::opt_i64")]
    pub discount_group_id: Option<i64>,
}

impl Record for UserGroup {
    const NAME: &'static str = "UserGroup";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_copies_known_fields() {
        let user = User::from_value(json!({
            "Id": 5,
            "Email": "ada@example.com",
            "Newsletter": "1",
            "Username": "ada",
            "Unknown": {"nested": 1},
        }))
        .unwrap();

        assert_eq!(user.id, Some(5));
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.newsletter, Some(true));
        assert_eq!(user.username.as_deref(), Some("ada"));
        assert_eq!(user.firstname, None);
    }

    #[test]
    fn test_user_group() {
        let group = UserGroup::from_value(json!({"Id": "2", "Title": "B2B"})).unwrap();
        assert_eq!(group.id(), Some(2));
        assert_eq!(group.title.as_deref(), Some("B2B"));
    }
}
