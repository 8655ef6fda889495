//! Borrow request and borrow record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::BookShort;
use super::enums::BorrowRequestStatus;
use super::user::UserShort;

/// A member's request to borrow a book, with populated references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: UserShort,
    pub book_id: BookShort,
    pub status: BorrowRequestStatus,
    pub request_date: DateTime<Utc>,
    #[serde(default)]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_date: Option<DateTime<Utc>>,
}

/// An approved borrow with its return state, with populated references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: UserShort,
    pub book_id: BookShort,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
    pub is_returned: bool,
    /// Whether the borrower has already reviewed the book for this loan.
    #[serde(default)]
    pub is_review: Option<bool>,
}

impl BorrowRecord {
    /// Overdue means past due and either unreturned or returned late.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match self.return_date {
            Some(returned) => returned > self.due_date,
            None => !self.is_returned && now > self.due_date,
        }
    }
}

/// Shortened record reference embedded in fine payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecordShort {
    #[serde(rename = "_id")]
    pub id: String,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub is_returned: bool,
}

/// Create borrow request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateBorrowRequest {
    #[validate(length(min = 1, message = "User is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Book is required"))]
    pub book_id: String,
}

/// Update borrow request (staff/admin operation)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBorrowRequest {
    pub status: BorrowRequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(due: DateTime<Utc>, returned: Option<DateTime<Utc>>) -> BorrowRecord {
        BorrowRecord {
            id: "r1".into(),
            user_id: UserShort {
                id: "u1".into(),
                full_name: "Reader".into(),
                email: "reader@example.com".into(),
            },
            book_id: BookShort {
                id: "b1".into(),
                title: "Title".into(),
                author: "Author".into(),
            },
            borrow_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            due_date: due,
            return_date: returned,
            is_returned: returned.is_some(),
            is_review: None,
        }
    }

    #[test]
    fn overdue_classification() {
        let due = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();

        assert!(!record(due, None).is_overdue_at(before));
        assert!(record(due, None).is_overdue_at(after));
        assert!(!record(due, Some(before)).is_overdue_at(after));
        assert!(record(due, Some(after)).is_overdue_at(after));
    }
}
