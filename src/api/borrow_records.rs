//! Borrow records (open and returned loans)

use crate::{
    endpoints,
    error::ApiResult,
    http::ApiClient,
    models::borrow::BorrowRecord,
};

#[derive(Clone)]
pub struct BorrowRecordsApi {
    client: ApiClient,
}

impl BorrowRecordsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all borrow records (staff/admin operation)
    pub async fn list(&self) -> ApiResult<Vec<BorrowRecord>> {
        let envelope = self.client.get(endpoints::borrow_records::GET_ALL).await?;
        envelope.field("data")
    }

    /// List the caller's own borrow records
    pub async fn my_records(&self) -> ApiResult<Vec<BorrowRecord>> {
        let envelope = self
            .client
            .get(endpoints::borrow_records::MY_RECORDS)
            .await?;
        envelope.field("data")
    }

    /// List records that are still out
    pub async fn not_returned(&self) -> ApiResult<Vec<BorrowRecord>> {
        let envelope = self
            .client
            .get(endpoints::borrow_records::NOT_RETURNED)
            .await?;
        envelope.field("data")
    }

    /// Get borrow record details by ID
    pub async fn get(&self, id: &str) -> ApiResult<BorrowRecord> {
        let envelope = self
            .client
            .get(&endpoints::borrow_records::by_id(id))
            .await?;
        envelope.field("data")
    }

    /// Borrow history of a book
    pub async fn for_book(&self, book_id: &str) -> ApiResult<Vec<BorrowRecord>> {
        let envelope = self
            .client
            .get(&endpoints::borrow_records::for_book(book_id))
            .await?;
        envelope.field("data")
    }

    /// Mark a borrowed book as returned
    pub async fn return_book(&self, id: &str) -> ApiResult<BorrowRecord> {
        let envelope = self
            .client
            .patch_empty(&endpoints::borrow_records::return_book(id))
            .await?;
        envelope.field("data")
    }
}
