//! User and user group operations.

use tracing::{debug, info, instrument};

use super::SmartwebClient;
use crate::{
    cache::UserMap,
    error::Result,
    fields::EntityType,
    models::{Record, User, UserGroup},
    operation::Operation,
    params::Params,
    payload::Payload,
    transport::Transport,
};

/// Fields requested when looking a user up by email.
const EMAIL_LOOKUP_FIELDS: [&str; 4] = ["Id", "Email", "Firstname", "Lastname"];

/// Keys users by id. Users without an id cannot be keyed and are left out.
fn key_by_id(users: Vec<User>) -> UserMap {
    users.into_iter().filter_map(|user| user.id.map(|id| (id, user))).collect()
}

impl<T: Transport> SmartwebClient<T> {
    /// Lists every user, keyed by id.
    ///
    /// With `use_cache`, a populated cache answers without a remote call. Otherwise the list is
    /// fetched and replaces the cached one. The cache stays locked while fetching, so concurrent
    /// callers wait for the fill instead of fetching twice.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a user cannot be decoded. The cache is left as it was.
    #[instrument(skip(self))]
    pub async fn get_users(&self, use_cache: bool) -> Result<UserMap> {
        let mut cached = self.user_cache.lock().await;
        if use_cache && let Some(users) = cached.as_ref() {
            debug!(users = users.len(), "user cache hit");
            return Ok(users.clone());
        }

        debug!("user cache miss");
        let users = key_by_id(self.fetch_many(Operation::UserGetAll, Params::new()).await?);
        *cached = Some(users.clone());
        Ok(users)
    }

    /// Lists newsletter subscribers not yet synchronized, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a user cannot be decoded.
    pub async fn get_newsletter_users(&self) -> Result<UserMap> {
        let users = self
            .fetch_many(
                Operation::UserGetAllNewsletter,
                Params::new().with("isNotSyncedOnly", true),
            )
            .await?;
        Ok(key_by_id(users))
    }

    /// Clears the user's newsletter flag and submits the user.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the user has no id
    /// - any error from the call
    pub async fn unsubscribe_newsletter_user(&self, user: &mut User) -> Result<Payload> {
        let user_id = user.require_id()?;
        user.newsletter = Some(false);
        info!(user_id, "unsubscribing user from newsletter");
        self.update_user(user).await
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the user cannot be decoded.
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.fetch_one(Operation::UserGetById, Params::new().with("UserId", user_id)).await
    }

    /// Finds the first user, in the order the service lists them, with the given email.
    ///
    /// Restricts the session's user fields to id, email and names, then refreshes the user
    /// listing, bypassing and replacing the cache.
    ///
    /// # Errors
    ///
    /// Returns error if either call fails or a user cannot be decoded.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.set_fields(EntityType::User, EMAIL_LOOKUP_FIELDS).await?;

        let mut cached = self.user_cache.lock().await;
        let users: Vec<User> = self.fetch_many(Operation::UserGetAll, Params::new()).await?;
        let found = users.iter().find(|user| user.email.as_deref() == Some(email)).cloned();
        *cached = Some(key_by_id(users));
        Ok(found)
    }

    /// Lists the users of a group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a user cannot be decoded.
    pub async fn get_users_by_group(&self, group_id: i64) -> Result<Vec<User>> {
        self.fetch_many(Operation::UserGetByGroup, Params::new().with("UserGroupId", group_id))
            .await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns error if the user cannot be serialized or the call fails.
    pub async fn create_user(&self, user: &User) -> Result<Payload> {
        info!(email = ?user.email, "creating user");
        self.call(Operation::UserCreate, Params::new().with_record("UserData", user)?).await
    }

    /// Updates a user.
    ///
    /// # Errors
    ///
    /// Returns error if the user cannot be serialized or the call fails.
    pub async fn update_user(&self, user: &User) -> Result<Payload> {
        info!(user_id = ?user.id, "updating user");
        self.call(Operation::UserUpdate, Params::new().with_record("UserData", user)?).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_user(&self, user_id: i64) -> Result<Payload> {
        info!(user_id, "deleting user");
        self.call(Operation::UserDelete, Params::new().with("UserId", user_id)).await
    }

    /// Lists every user group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a group cannot be decoded.
    pub async fn get_user_groups(&self) -> Result<Vec<UserGroup>> {
        self.fetch_many(Operation::UserGroupGetAll, Params::new()).await
    }

    /// Fetches a user group by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the group cannot be decoded.
    pub async fn get_user_group(&self, group_id: i64) -> Result<Option<UserGroup>> {
        self.fetch_one(Operation::UserGroupGetById, Params::new().with("UserGroupId", group_id))
            .await
    }

    /// Creates a user group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn create_user_group(&self, group: &UserGroup) -> Result<Payload> {
        info!(title = ?group.title, "creating user group");
        self.call(Operation::UserGroupCreate, Params::new().with_record("UserGroupData", group)?)
            .await
    }

    /// Updates a user group.
    ///
    /// # Errors
    ///
    /// Returns error if the group cannot be serialized or the call fails.
    pub async fn update_user_group(&self, group: &UserGroup) -> Result<Payload> {
        info!(group_id = ?group.id, "updating user group");
        self.call(Operation::UserGroupUpdate, Params::new().with_record("UserGroupData", group)?)
            .await
    }

    /// Deletes a user group.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_user_group(&self, group_id: i64) -> Result<Payload> {
        info!(group_id, "deleting user group");
        self.call(Operation::UserGroupDelete, Params::new().with("UserGroupId", group_id)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        SmartwebClient, SmartwebError, cache::UserCache, models::User,
        transport::testing::ScriptedTransport,
    };

    const TWO_USERS: &str = "<item><Id>2</Id><Email>b@example.com</Email></item>\
                             <item><Id>1</Id><Email>a@example.com</Email></item>";

    #[tokio::test]
    async fn test_get_users_cached_calls_once() {
        let client =
            SmartwebClient::unconnected(ScriptedTransport::new().result("User_GetAll", TWO_USERS));

        let first = client.get_users(true).await.unwrap();
        let second = client.get_users(true).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(client.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_get_users_uncached_replaces_cache() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new()
                .result("User_GetAll", TWO_USERS)
                .result("User_GetAll", "<item><Id>3</Id></item>"),
        );

        client.get_users(true).await.unwrap();
        let refreshed = client.get_users(false).await.unwrap();

        assert_eq!(client.transport().calls().len(), 2);
        assert_eq!(refreshed.keys().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(client.user_cache().get().await, Some(refreshed));
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new()
                .result("User_GetAll", TWO_USERS)
                .result("User_GetAll", TWO_USERS),
        );

        client.get_users(true).await.unwrap();
        client.invalidate_user_cache().await;
        client.get_users(true).await.unwrap();

        assert_eq!(client.transport().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_empty() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().fault("SOAP-ENV:Server", "Not logged in"),
        );

        let result = client.get_users(true).await;

        assert!(matches!(result, Err(SmartwebError::RemoteFault { .. })));
        assert!(!client.user_cache().is_populated().await);
    }

    #[tokio::test]
    async fn test_shared_cache_answers_second_client() {
        let cache = Arc::new(UserCache::new());
        let first = SmartwebClient::unconnected(
            ScriptedTransport::new().result("User_GetAll", TWO_USERS),
        )
        .with_user_cache(Arc::clone(&cache));
        let second =
            SmartwebClient::unconnected(ScriptedTransport::new()).with_user_cache(cache);

        first.get_users(true).await.unwrap();
        let users = second.get_users(true).await.unwrap();

        assert_eq!(users.len(), 2);
        assert!(second.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_users_without_id_are_skipped() {
        let client = SmartwebClient::unconnected(ScriptedTransport::new().result(
            "User_GetAll",
            "<item><Id>1</Id></item><item><Email>x@example.com</Email></item>",
        ));
        assert_eq!(client.get_users(false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new()
                .result("User_SetFields", "true")
                .result("User_GetAll", TWO_USERS),
        );

        let user = client.get_user_by_email("b@example.com").await.unwrap().unwrap();

        assert_eq!(user.id, Some(2));
        assert_eq!(client.transport().operations(), vec!["User_SetFields", "User_GetAll"]);
        let calls = client.transport().calls();
        assert!(calls[0].body.contains("<Fields>Id,Email,Firstname,Lastname</Fields>"));
    }

    #[tokio::test]
    async fn test_get_user_by_email_first_in_listing_order() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("User_SetFields", "true").result(
                "User_GetAll",
                "<item><Id>8</Id><Email>dup@example.com</Email></item>\
                 <item><Id>3</Id><Email>dup@example.com</Email></item>",
            ),
        );

        let user = client.get_user_by_email("dup@example.com").await.unwrap().unwrap();

        assert_eq!(user.id, Some(8));
        let cached = client.user_cache().get().await.unwrap();
        assert_eq!(cached.keys().copied().collect::<Vec<_>>(), vec![3, 8]);
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new()
                .result("User_SetFields", "true")
                .result("User_GetAll", TWO_USERS),
        );
        assert!(client.get_user_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_newsletter_users() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new().result("User_GetAllNewsletter", "<item><Id>5</Id></item>"),
        );

        let users = client.get_newsletter_users().await.unwrap();

        assert!(users.contains_key(&5));
        assert!(client.transport().last_body().contains("<isNotSyncedOnly>true</isNotSyncedOnly>"));
    }

    #[tokio::test]
    async fn test_unsubscribe_newsletter_user() {
        let client =
            SmartwebClient::unconnected(ScriptedTransport::new().result("User_Update", "true"));
        let mut user = User { id: Some(5), newsletter: Some(true), ..User::default() };

        client.unsubscribe_newsletter_user(&mut user).await.unwrap();

        assert_eq!(user.newsletter, Some(false));
        let body = client.transport().last_body();
        assert!(body.contains("<UserData>"));
        assert!(body.contains("<Newsletter>false</Newsletter>"));
    }

    #[tokio::test]
    async fn test_unsubscribe_without_id_leaves_user() {
        let client = SmartwebClient::unconnected(ScriptedTransport::new());
        let mut user = User { newsletter: Some(true), ..User::default() };

        let result = client.unsubscribe_newsletter_user(&mut user).await;

        assert!(matches!(result, Err(SmartwebError::InvalidInput(_))));
        assert_eq!(user.newsletter, Some(true));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetched_user_resubmits_nested_lists() {
        let client = SmartwebClient::unconnected(
            ScriptedTransport::new()
                .result(
                    "User_GetById",
                    "<Id>5</Id><Newsletter>true</Newsletter>\
                     <InterestFields><item>3</item><item>4</item></InterestFields>\
                     <LanguageAccess><item>26</item></LanguageAccess>",
                )
                .result("User_Update", "true"),
        );

        let mut user = client.get_user(5).await.unwrap().unwrap();
        client.unsubscribe_newsletter_user(&mut user).await.unwrap();

        let body = client.transport().last_body();
        assert!(body.contains("<InterestFields><item>3</item><item>4</item></InterestFields>"));
        assert!(body.contains("<LanguageAccess><item>26</item></LanguageAccess>"));
        assert!(body.contains("<Newsletter>false</Newsletter>"));
        assert!(!body.contains("<item><item>"));
    }
}
