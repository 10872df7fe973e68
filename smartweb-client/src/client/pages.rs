//! Page text operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::PageText, operation::Operation, params::Params, payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every page text.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a page cannot be decoded.
    pub async fn get_page_texts(&self) -> Result<Vec<PageText>> {
        self.fetch_many(Operation::PageTextGetAll, Params::new()).await
    }

    /// Fetches a page text by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the page cannot be decoded.
    pub async fn get_page_text(&self, page_id: i64) -> Result<Option<PageText>> {
        self.fetch_one(Operation::PageTextGetById, Params::new().with("PageTextId", page_id)).await
    }

    /// Creates a page text.
    ///
    /// # Errors
    ///
    /// Returns error if the page cannot be serialized or the call fails.
    pub async fn create_page_text(&self, page: &PageText) -> Result<Payload> {
        info!(title = ?page.title, "creating page text");
        self.call(Operation::PageTextCreate, Params::new().with_record("PageTextData", page)?)
            .await
    }

    /// Updates a page text.
    ///
    /// # Errors
    ///
    /// Returns error if the page cannot be serialized or the call fails.
    pub async fn update_page_text(&self, page: &PageText) -> Result<Payload> {
        info!(page_id = ?page.id, "updating page text");
        self.call(Operation::PageTextUpdate, Params::new().with_record("PageTextData", page)?)
            .await
    }

    /// Deletes a page text.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_page_text(&self, page_id: i64) -> Result<Payload> {
        info!(page_id, "deleting page text");
        self.call(Operation::PageTextDelete, Params::new().with("PageTextId", page_id)).await
    }
}
