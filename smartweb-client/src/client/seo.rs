//! SEO redirect operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::SeoRedirect, operation::Operation, params::Params, payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every redirect.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a redirect cannot be decoded.
    pub async fn get_seo_redirects(&self) -> Result<Vec<SeoRedirect>> {
        self.fetch_many(Operation::SeoRedirectGetAll, Params::new()).await
    }

    /// Fetches a redirect by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the redirect cannot be decoded.
    pub async fn get_seo_redirect(&self, redirect_id: i64) -> Result<Option<SeoRedirect>> {
        self.fetch_one(
            Operation::SeoRedirectGetById,
            Params::new().with("SEORedirectId", redirect_id),
        )
        .await
    }

    /// Creates a redirect.
    ///
    /// # Errors
    ///
    /// Returns error if the redirect cannot be serialized or the call fails.
    pub async fn create_seo_redirect(&self, redirect: &SeoRedirect) -> Result<Payload> {
        info!("creating seo redirect");
        self.call(
            Operation::SeoRedirectCreate,
            Params::new().with_record("SEORedirectData", redirect)?,
        )
        .await
    }

    /// Updates a redirect.
    ///
    /// # Errors
    ///
    /// Returns error if the redirect cannot be serialized or the call fails.
    pub async fn update_seo_redirect(&self, redirect: &SeoRedirect) -> Result<Payload> {
        info!(redirect_id = ?redirect.id, "updating seo redirect");
        self.call(
            Operation::SeoRedirectUpdate,
            Params::new().with_record("SEORedirectData", redirect)?,
        )
        .await
    }

    /// Deletes a redirect.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_seo_redirect(&self, redirect_id: i64) -> Result<Payload> {
        info!(redirect_id, "deleting seo redirect");
        self.call(
            Operation::SeoRedirectDelete,
            Params::new().with("SEORedirectId", redirect_id),
        )
        .await
    }
}
