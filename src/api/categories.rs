//! Catalog categories

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::category::{Category, CreateCategory, UpdateCategory},
};

#[derive(Clone)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List categories
    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        let envelope = self.client.get(endpoints::categories::GET_ALL).await?;
        envelope.field("data")
    }

    /// Get category by ID
    pub async fn get(&self, id: &str) -> ApiResult<Category> {
        let envelope = self.client.get(&endpoints::categories::by_id(id)).await?;
        envelope.field("data")
    }

    /// Create a category
    pub async fn create(&self, category: &CreateCategory) -> ApiResult<Category> {
        validate(category)?;
        let envelope = self
            .client
            .post(endpoints::categories::GET_ALL, category)
            .await?;
        envelope.field("data")
    }

    /// Rename a category
    pub async fn update(&self, id: &str, changes: &UpdateCategory) -> ApiResult<Category> {
        validate(changes)?;
        let envelope = self
            .client
            .put(&endpoints::categories::by_id(id), changes)
            .await?;
        envelope.field("data")
    }

    /// Delete a category
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client
            .delete(&endpoints::categories::by_id(id))
            .await?;
        Ok(())
    }
}
