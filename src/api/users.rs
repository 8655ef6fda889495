//! User and profile management

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::ApiClient,
    models::user::{CreateUser, UpdateProfile, UpdateUser, User},
};

#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List users (staff/admin operation)
    pub async fn list(&self) -> ApiResult<Vec<User>> {
        let envelope = self.client.get(endpoints::users::GET_ALL).await?;
        envelope.field("data")
    }

    /// List users who currently hold unreturned books
    pub async fn list_with_active_borrows(&self) -> ApiResult<Vec<User>> {
        let envelope = self
            .client
            .get(endpoints::borrow_records::NOT_RETURNED)
            .await?;
        envelope.field("data")
    }

    /// Get user details by ID
    pub async fn get(&self, id: &str) -> ApiResult<User> {
        let envelope = self.client.get(&endpoints::users::by_id(id)).await?;
        envelope.field("data")
    }

    /// Create a user account (staff/admin operation)
    pub async fn create(&self, user: &CreateUser) -> ApiResult<User> {
        validate(user)?;
        let envelope = self.client.post(endpoints::users::GET_ALL, user).await?;
        envelope.field("data")
    }

    /// Update a user account (staff/admin operation)
    pub async fn update(&self, id: &str, changes: &UpdateUser) -> ApiResult<User> {
        validate(changes)?;
        let envelope = self
            .client
            .put(&endpoints::users::by_id(id), changes)
            .await?;
        envelope.field("data")
    }

    /// Update the caller's own profile
    pub async fn update_profile(&self, id: &str, profile: &UpdateProfile) -> ApiResult<User> {
        validate(profile)?;
        let envelope = self
            .client
            .put(&endpoints::users::by_id(id), profile)
            .await?;
        envelope.field("data")
    }

    /// Delete a user account (staff/admin operation)
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&endpoints::users::by_id(id)).await?;
        Ok(())
    }
}
