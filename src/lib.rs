//! Libris Library Management System client
//!
//! A Rust client for the Libris library-management REST API: catalog
//! browsing, circulation (borrow requests and records), fines, reviews,
//! and account management. Session handling — bearer-token attachment,
//! coordinated refresh on expiry, and logout on unrecoverable
//! authentication failure — is transparent to callers.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, FailureResponse};
pub use http::response::{ApiResponse, SuccessResponse};
pub use http::token::{MemoryTokenStore, TokenStore, API_REFRESH_TOKEN_KEY, API_TOKEN_KEY};
pub use http::{ApiClient, RequestOptions, SessionEndHook};

/// Top-level handle: configuration, the shared authenticated client, and
/// one typed group per resource.
#[derive(Clone)]
pub struct LibrisClient {
    config: Arc<ClientConfig>,
    http: ApiClient,
    api: api::Api,
}

impl LibrisClient {
    /// Create a client with in-memory token storage and no session-end
    /// hook. Good for tools and tests.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Self::with_store(config, Arc::new(MemoryTokenStore::new()), None)
    }

    /// Create a client with injected token storage and an optional hook
    /// invoked when the session cannot be refreshed.
    pub fn with_store(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        on_session_end: Option<SessionEndHook>,
    ) -> ApiResult<Self> {
        let http = ApiClient::new(&config.api, store, on_session_end)?;
        Ok(Self {
            config: Arc::new(config),
            api: api::Api::new(http.clone()),
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying authenticated client, for requests outside the typed
    /// surface.
    pub fn http(&self) -> &ApiClient {
        &self.http
    }

    pub fn auth(&self) -> &api::auth::AuthApi {
        &self.api.auth
    }

    pub fn books(&self) -> &api::books::BooksApi {
        &self.api.books
    }

    pub fn categories(&self) -> &api::categories::CategoriesApi {
        &self.api.categories
    }

    pub fn users(&self) -> &api::users::UsersApi {
        &self.api.users
    }

    pub fn fines(&self) -> &api::fines::FinesApi {
        &self.api.fines
    }

    pub fn reviews(&self) -> &api::reviews::ReviewsApi {
        &self.api.reviews
    }

    pub fn borrow_requests(&self) -> &api::borrow_requests::BorrowRequestsApi {
        &self.api.borrow_requests
    }

    pub fn borrow_records(&self) -> &api::borrow_records::BorrowRecordsApi {
        &self.api.borrow_records
    }
}
