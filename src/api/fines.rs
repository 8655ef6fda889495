//! Fines

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::fine::{CreateFine, Fine, UpdateFine},
};

#[derive(Clone)]
pub struct FinesApi {
    client: ApiClient,
}

impl FinesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all fines (staff/admin operation)
    pub async fn list(&self) -> ApiResult<Vec<Fine>> {
        let envelope = self.client.get(endpoints::fines::GET_ALL).await?;
        envelope.field("data")
    }

    /// List the caller's own fines
    pub async fn my_fines(&self) -> ApiResult<Vec<Fine>> {
        let envelope = self.client.get(endpoints::fines::GET_MINE).await?;
        envelope.field("data")
    }

    /// Get fine details by ID
    pub async fn get(&self, id: &str) -> ApiResult<Fine> {
        let envelope = self.client.get(&endpoints::fines::by_id(id)).await?;
        envelope.field("data")
    }

    /// Issue a fine (staff/admin operation)
    pub async fn create(&self, fine: &CreateFine) -> ApiResult<Fine> {
        validate(fine)?;
        let envelope = self.client.post(endpoints::fines::GET_ALL, fine).await?;
        envelope.field("data")
    }

    /// Update a fine (staff/admin operation)
    pub async fn update(&self, id: &str, changes: &UpdateFine) -> ApiResult<Fine> {
        validate(changes)?;
        let envelope = self
            .client
            .put(&endpoints::fines::by_id(id), changes)
            .await?;
        envelope.field("data")
    }

    /// Mark a fine as paid
    pub async fn pay(&self, id: &str) -> ApiResult<Fine> {
        let envelope = self.client.patch_empty(&endpoints::fines::pay(id)).await?;
        envelope.field("data")
    }

    /// Delete a fine (staff/admin operation)
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&endpoints::fines::by_id(id)).await?;
        Ok(())
    }
}
