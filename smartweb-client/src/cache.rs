//! User list cache.
//!
//! Listing every user is expensive on large shops, so the client keeps the last full listing in
//! a [`UserCache`]. The cache is a plain collaborator: the client owns one by default, callers
//! can share one between clients with [`SmartwebClient::with_user_cache`], and
//! [`UserCache::invalidate`] empties it.
//!
//! [`SmartwebClient::with_user_cache`]: crate::client::SmartwebClient::with_user_cache

use std::collections::BTreeMap;

use tokio::sync::{Mutex, MutexGuard};

use crate::models::User;

/// Users keyed by id.
pub type UserMap = BTreeMap<i64, User>;

/// Cached user listing, either empty or populated.
#[derive(Debug, Default)]
pub struct UserCache {
    users: Mutex<Option<UserMap>>,
}

impl UserCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached listing, if populated.
    pub async fn get(&self) -> Option<UserMap> {
        self.users.lock().await.clone()
    }

    /// Replaces the cached listing.
    pub async fn store(&self, users: UserMap) {
        *self.users.lock().await = Some(users);
    }

    /// Empties the cache.
    pub async fn invalidate(&self) {
        self.users.lock().await.take();
    }

    /// Returns true if a listing is cached.
    pub async fn is_populated(&self) -> bool {
        self.users.lock().await.is_some()
    }

    /// Locks the cache for a check-then-fill sequence.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, Option<UserMap>> {
        self.users.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(ids: &[i64]) -> UserMap {
        ids.iter().map(|&id| (id, User { id: Some(id), ..User::default() })).collect()
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let cache = UserCache::new();
        assert!(!cache.is_populated().await);
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let cache = UserCache::new();
        cache.store(users(&[1, 2])).await;

        let cached = cache.get().await.unwrap();
        assert_eq!(cached.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_store_replaces() {
        let cache = UserCache::new();
        cache.store(users(&[1, 2])).await;
        cache.store(users(&[3])).await;

        assert_eq!(cache.get().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = UserCache::new();
        cache.store(users(&[1])).await;
        cache.invalidate().await;

        assert!(!cache.is_populated().await);
    }
}
