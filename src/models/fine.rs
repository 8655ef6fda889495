//! Fine model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::BookShort;
use super::borrow::BorrowRecordShort;
use super::user::UserShort;

/// Fine with populated references, as returned by the fines endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: UserShort,
    pub borrow_record_id: BorrowRecordShort,
    pub book_id: BookShort,
    /// Amount owed, in the backend's currency unit. The client never does
    /// arithmetic on it.
    pub amount: f64,
    pub reason: String,
    pub is_paid: bool,
    pub issued_date: DateTime<Utc>,
}

/// Create fine request (staff/admin operation)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateFine {
    #[validate(length(min = 1, message = "User is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Borrow record is required"))]
    pub borrow_record_id: String,
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: f64,
    #[validate(length(min = 1, message = "Reason cannot be empty"))]
    pub reason: String,
}

/// Update fine request
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateFine {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Amount cannot be negative"))]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Reason cannot be empty"))]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}
