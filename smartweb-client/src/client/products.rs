//! Product operations.

use chrono::NaiveDateTime;
use tracing::{debug, info, instrument};

use super::SmartwebClient;
use crate::{
    error::Result,
    models::{DeliveryTime, Product, ProductPicture},
    operation::Operation,
    params::Params,
    payload::Payload,
    transport::Transport,
};

impl<T: Transport> SmartwebClient<T> {
    /// Lists every product.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a product cannot be decoded.
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.fetch_many(Operation::ProductGetAll, Params::new()).await
    }

    /// Fetches a product by id. Returns `None` if no such product exists.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the product cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: smartweb_client::SmartwebClient) -> smartweb_client::Result<()> {
    /// match client.get_product(42).await? {
    ///     Some(product) => println!("{:?} costs {:?}", product.title, product.price),
    ///     None => println!("no product 42"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: i64) -> Result<Option<Product>> {
        self.fetch_one(Operation::ProductGetById, Params::new().with("ProductId", product_id)).await
    }

    /// Fetches several products by id.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a product cannot be decoded.
    pub async fn get_products_by_ids(&self, product_ids: &[i64]) -> Result<Vec<Product>> {
        self.fetch_many(
            Operation::ProductGetByIds,
            Params::new().with_list("ProductIds", product_ids),
        )
        .await
    }

    /// Fetches a product by item number.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the product cannot be decoded.
    pub async fn get_product_by_item_number(&self, item_number: &str) -> Result<Option<Product>> {
        self.fetch_one(
            Operation::ProductGetByItemNumber,
            Params::new().with("ItemNumber", item_number),
        )
        .await
    }

    /// Lists the products of a category.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a product cannot be decoded.
    pub async fn get_products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.fetch_many(
            Operation::ProductGetByCategory,
            Params::new().with("CategoryId", category_id),
        )
        .await
    }

    /// Lists products updated from `start` until `end`, or until now when `end` is `None`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a product cannot be decoded.
    pub async fn get_products_by_updated_date(
        &self,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Result<Vec<Product>> {
        let params = Params::new().with_datetime("Start", Some(start)).with_datetime("End", end);
        self.fetch_many(Operation::ProductGetByUpdatedDate, params).await
    }

    /// Searches products by text.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a product cannot be decoded.
    pub async fn search_products(&self, search: &str) -> Result<Vec<Product>> {
        debug!(search, "searching products");
        self.fetch_many(Operation::ProductSearch, Params::new().with("SearchString", search)).await
    }

    /// Creates a product and returns the reply, normally the new id.
    ///
    /// # Errors
    ///
    /// Returns error if the product cannot be serialized or the call fails.
    pub async fn create_product(&self, product: &Product) -> Result<Payload> {
        info!(item_number = ?product.item_number, "creating product");
        self.call(Operation::ProductCreate, Params::new().with_record("ProductData", product)?)
            .await
    }

    /// Updates a product. The record must carry `id` or `item_number`.
    ///
    /// # Errors
    ///
    /// Returns error if the product cannot be serialized or the call fails.
    pub async fn update_product(&self, product: &Product) -> Result<Payload> {
        info!(product_id = ?product.id, "updating product");
        self.call(Operation::ProductUpdate, Params::new().with_record("ProductData", product)?)
            .await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_product(&self, product_id: i64) -> Result<Payload> {
        info!(product_id, "deleting product");
        self.call(Operation::ProductDelete, Params::new().with("ProductId", product_id)).await
    }

    /// Lists the pictures of a product with their public URLs in shop `shop_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a picture cannot be decoded.
    pub async fn get_product_pictures(
        &self,
        product_id: i64,
        shop_id: i64,
    ) -> Result<Vec<ProductPicture>> {
        let mut pictures: Vec<ProductPicture> = self
            .fetch_many(Operation::ProductGetPictures, Params::new().with("ProductId", product_id))
            .await?;
        for picture in &mut pictures {
            picture.resolve_file_path(shop_id);
        }
        Ok(pictures)
    }

    /// Adds a picture to a product.
    ///
    /// # Errors
    ///
    /// Returns error if the picture cannot be serialized or the call fails.
    pub async fn create_product_picture(&self, picture: &ProductPicture) -> Result<Payload> {
        info!(product_id = ?picture.product_id, "creating product picture");
        self.call(
            Operation::ProductCreatePicture,
            Params::new().with_record("PictureData", picture)?,
        )
        .await
    }

    /// Deletes a product picture.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn delete_product_picture(&self, picture_id: i64) -> Result<Payload> {
        info!(picture_id, "deleting product picture");
        self.call(Operation::ProductDeletePicture, Params::new().with("PictureId", picture_id))
            .await
    }

    /// Lists every delivery time.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a delivery time cannot be decoded.
    pub async fn get_delivery_times(&self) -> Result<Vec<DeliveryTime>> {
        self.fetch_many(Operation::ProductGetDeliveryTimeAll, Params::new()).await
    }

    /// Lists every additional product type, as returned by the service.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn get_additional_types(&self) -> Result<Payload> {
        self.call(Operation::ProductGetAdditionalTypesAll, Params::new()).await
    }
}
