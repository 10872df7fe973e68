//! Category operations.

use tracing::info;

use super::SmartwebClient;
use crate::{
    error::Result, models::Category, operation::Operation, params::Params, payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every category.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a category cannot be decoded.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.fetch_many(Operation::CategoryGetAll, Params::new()).await
    }

    /// Fetches a category by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the category cannot be decoded.
    pub async fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        self.fetch_one(Operation::CategoryGetById, Params::new().with("CategoryId", category_id))
            .await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns error if the category cannot be serialized or the call fails.
    pub async fn create_category(&self, category: &Category) -> Result<Payload> {
        info!(title = ?category.title, "creating category");
        self.call(Operation::CategoryCreate, Params::new().with_record("CategoryData", category)?)
            .await
    }

    /// Updates a category.
    ///
    /// # Errors
    ///
    /// Returns error if the category cannot be serialized or the call fails.
    pub async fn update_category(&self, category: &Category) -> Result<Payload> {
        info!(category_id = ?category.id, "updating category");
        self.call(Operation::CategoryUpdate, Params::new().with_record("CategoryData", category)?)
            .await
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_category(&self, category_id: i64) -> Result<Payload> {
        info!(category_id, "deleting category");
        self.call(Operation::CategoryDelete, Params::new().with("CategoryId", category_id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{SmartwebClient, models::Category, transport::testing::ScriptedTransport};

    #[tokio::test]
    async fn test_get_categories() {
        let client = SmartwebClient::unconnected(ScriptedTransport::new().result(
            "Category_GetAll",
            "<item><Id>1</Id><Title>Mugs</Title></item><item><Id>2</Id><Title>Cups</Title></item>",
        ));

        let categories = client.get_categories().await.unwrap();

        let titles: Vec<_> = categories.iter().filter_map(|c| c.title.as_deref()).collect();
        assert_eq!(titles, vec!["Mugs", "Cups"]);
    }

    #[tokio::test]
    async fn test_create_category_returns_new_id() {
        let client =
            SmartwebClient::unconnected(ScriptedTransport::new().result("Category_Create", "15"));
        let category = Category { title: Some("Plates".to_owned()), ..Category::default() };

        let reply = client.create_category(&category).await.unwrap();

        assert_eq!(reply.as_id(), Some(15));
        let body = client.transport().last_body();
        assert!(body.contains("<CategoryData><Title>Plates</Title></CategoryData>"));
    }
}
