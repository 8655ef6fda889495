//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::Role;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Whether the account's email address has been verified. Older
    /// accounts predate verification and omit the field entirely.
    #[serde(default)]
    pub is_verified: Option<bool>,
}

/// Shortened user reference embedded in circulation and fine payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserShort {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// Create user request (staff/admin operation)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Update user request (staff/admin operation)
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Update own profile request (for authenticated users)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: String,
}
