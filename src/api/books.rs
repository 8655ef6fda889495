//! Catalog books

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksApi {
    client: ApiClient,
}

impl BooksApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List catalog books
    pub async fn list(&self) -> ApiResult<Vec<Book>> {
        let envelope = self.client.get(endpoints::books::GET_ALL).await?;
        envelope.field("books")
    }

    /// List catalog books through the paginated v2 endpoint
    pub async fn list_v2(&self) -> ApiResult<Vec<Book>> {
        let envelope = self.client.get(endpoints::books::GET_ALL_V2).await?;
        envelope.field("books")
    }

    /// Get book details by ID
    pub async fn get(&self, id: &str) -> ApiResult<Book> {
        let envelope = self.client.get(&endpoints::books::by_id(id)).await?;
        envelope.field("book")
    }

    /// Add a book to the catalog
    pub async fn create(&self, book: &CreateBook) -> ApiResult<Book> {
        validate(book)?;
        let envelope = self.client.post(endpoints::books::GET_ALL, book).await?;
        envelope.field("book")
    }

    /// Update a catalog book
    pub async fn update(&self, id: &str, changes: &UpdateBook) -> ApiResult<Book> {
        validate(changes)?;
        let envelope = self
            .client
            .put(&endpoints::books::by_id(id), changes)
            .await?;
        envelope.field("book")
    }

    /// Remove a book from the catalog
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&endpoints::books::by_id(id)).await?;
        Ok(())
    }
}
