//! Typed API groups for the Libris REST endpoints

pub mod auth;
pub mod books;
pub mod borrow_records;
pub mod borrow_requests;
pub mod categories;
pub mod fines;
pub mod reviews;
pub mod users;

use crate::http::ApiClient;

/// Container for all API groups
#[derive(Clone)]
pub struct Api {
    pub auth: auth::AuthApi,
    pub books: books::BooksApi,
    pub categories: categories::CategoriesApi,
    pub users: users::UsersApi,
    pub fines: fines::FinesApi,
    pub reviews: reviews::ReviewsApi,
    pub borrow_requests: borrow_requests::BorrowRequestsApi,
    pub borrow_records: borrow_records::BorrowRecordsApi,
}

impl Api {
    /// Create all groups around a shared client
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: auth::AuthApi::new(client.clone()),
            books: books::BooksApi::new(client.clone()),
            categories: categories::CategoriesApi::new(client.clone()),
            users: users::UsersApi::new(client.clone()),
            fines: fines::FinesApi::new(client.clone()),
            reviews: reviews::ReviewsApi::new(client.clone()),
            borrow_requests: borrow_requests::BorrowRequestsApi::new(client.clone()),
            borrow_records: borrow_records::BorrowRecordsApi::new(client),
        }
    }
}
