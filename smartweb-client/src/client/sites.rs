//! Site operations.

use super::SmartwebClient;
use crate::{
    error::Result, models::Site, operation::Operation, params::Params, transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every site of the shop.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a site cannot be decoded.
    pub async fn get_sites(&self) -> Result<Vec<Site>> {
        self.fetch_many(Operation::SiteGetAll, Params::new()).await
    }

    /// Fetches a site by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the site cannot be decoded.
    pub async fn get_site(&self, site_id: i64) -> Result<Option<Site>> {
        self.fetch_one(Operation::SiteGetById, Params::new().with("SiteId", site_id)).await
    }
}
