//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Availability status of a catalog book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Available,
    Borrowed,
    Damaged,
    Lost,
    OutOfStock,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
            BookStatus::Damaged => "damaged",
            BookStatus::Lost => "lost",
            BookStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Member,
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Member => "member",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BorrowRequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a borrow request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorrowRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for BorrowRequestStatus {
    fn default() -> Self {
        BorrowRequestStatus::Pending
    }
}

impl std::fmt::Display for BorrowRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BorrowRequestStatus::Pending => "pending",
            BorrowRequestStatus::Approved => "approved",
            BorrowRequestStatus::Rejected => "rejected",
        };
        write!(f, "{}", label)
    }
}
