//! Book reviews

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::review::{CreateReview, Review, UpdateReview},
};

#[derive(Clone)]
pub struct ReviewsApi {
    client: ApiClient,
}

impl ReviewsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all reviews for a book
    pub async fn for_book(&self, book_id: &str) -> ApiResult<Vec<Review>> {
        let envelope = self
            .client
            .get(&endpoints::reviews::for_book(book_id))
            .await?;
        envelope.field("data")
    }

    /// Get the caller's own review of a book, if any
    pub async fn my_review_for_book(&self, book_id: &str) -> ApiResult<Option<Review>> {
        let envelope = self
            .client
            .get(&endpoints::reviews::user_review_for_book(book_id))
            .await?;
        envelope.field("data")
    }

    /// Post a review
    pub async fn create(&self, review: &CreateReview) -> ApiResult<Review> {
        validate(review)?;
        let envelope = self.client.post(endpoints::reviews::CREATE, review).await?;
        envelope.field("data")
    }

    /// Edit a review
    pub async fn update(&self, id: &str, changes: &UpdateReview) -> ApiResult<Review> {
        validate(changes)?;
        let envelope = self
            .client
            .put(&endpoints::reviews::by_id(id), changes)
            .await?;
        envelope.field("data")
    }

    /// Delete a review
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&endpoints::reviews::by_id(id)).await?;
        Ok(())
    }
}
