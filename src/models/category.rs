//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create category request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
}

/// Update category request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
}
