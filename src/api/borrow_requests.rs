//! Borrow requests (pending circulation approvals)

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::borrow::{BorrowRequest, CreateBorrowRequest, UpdateBorrowRequest},
};

#[derive(Clone)]
pub struct BorrowRequestsApi {
    client: ApiClient,
}

impl BorrowRequestsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all borrow requests (staff/admin operation)
    pub async fn list(&self) -> ApiResult<Vec<BorrowRequest>> {
        let envelope = self.client.get(endpoints::borrow_requests::GET_ALL).await?;
        envelope.field("data")
    }

    /// List the caller's own borrow requests
    pub async fn my_requests(&self) -> ApiResult<Vec<BorrowRequest>> {
        let envelope = self
            .client
            .get(endpoints::borrow_requests::MY_REQUESTS)
            .await?;
        envelope.field("data")
    }

    /// Get borrow request details by ID
    pub async fn get(&self, id: &str) -> ApiResult<BorrowRequest> {
        let envelope = self
            .client
            .get(&endpoints::borrow_requests::by_id(id))
            .await?;
        envelope.field("data")
    }

    /// Ask to borrow a book
    pub async fn create(&self, request: &CreateBorrowRequest) -> ApiResult<BorrowRequest> {
        validate(request)?;
        let envelope = self
            .client
            .post(endpoints::borrow_requests::GET_ALL, request)
            .await?;
        envelope.field("data")
    }

    /// Approve a pending request, opening a borrow record
    pub async fn approve(&self, id: &str) -> ApiResult<BorrowRequest> {
        let envelope = self
            .client
            .patch_empty(&endpoints::borrow_requests::approve(id))
            .await?;
        envelope.field("data")
    }

    /// Overwrite a request's status directly (staff/admin operation)
    pub async fn update(&self, id: &str, changes: &UpdateBorrowRequest) -> ApiResult<BorrowRequest> {
        let envelope = self
            .client
            .put(&endpoints::borrow_requests::by_id(id), changes)
            .await?;
        envelope.field("data")
    }

    /// Reject a pending request
    pub async fn reject(&self, id: &str) -> ApiResult<BorrowRequest> {
        let envelope = self
            .client
            .patch_empty(&endpoints::borrow_requests::reject(id))
            .await?;
        envelope.field("data")
    }

    /// Withdraw a borrow request
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client
            .delete(&endpoints::borrow_requests::by_id(id))
            .await?;
        Ok(())
    }
}
