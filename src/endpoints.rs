//! REST endpoint paths, relative to the configured base address.

pub mod auth {
    pub const REGISTER: &str = "auth/register";
    pub const LOGIN: &str = "auth/login";
    pub const LOGOUT: &str = "auth/logout";
    pub const REFRESH: &str = "auth/refresh";
    pub const CHANGE_PASSWORD_FIRST_TIME: &str = "auth/change-password-first-time";
    pub const FORGOT_PASSWORD: &str = "auth/forgot-password";
    pub const VERIFY_OTP: &str = "auth/verify-otp";
    pub const RESET_PASSWORD: &str = "auth/reset-password";

    pub fn verify_email(token: &str) -> String {
        format!("auth/verify-email?token={token}")
    }
}

pub mod books {
    pub const GET_ALL: &str = "books";
    pub const GET_ALL_V2: &str = "books/v2";

    pub fn by_id(id: &str) -> String {
        format!("books/{id}")
    }
}

pub mod categories {
    pub const GET_ALL: &str = "categories";

    pub fn by_id(id: &str) -> String {
        format!("categories/{id}")
    }
}

pub mod users {
    pub const GET_ALL: &str = "users";

    pub fn by_id(id: &str) -> String {
        format!("users/{id}")
    }
}

pub mod fines {
    pub const GET_ALL: &str = "fines";
    pub const GET_MINE: &str = "fines/me";

    pub fn by_id(id: &str) -> String {
        format!("fines/{id}")
    }

    pub fn pay(id: &str) -> String {
        format!("fines/{id}/pay")
    }
}

pub mod reviews {
    pub const CREATE: &str = "reviews";

    pub fn by_id(id: &str) -> String {
        format!("reviews/{id}")
    }

    pub fn for_book(book_id: &str) -> String {
        format!("reviews/book/{book_id}")
    }

    pub fn user_review_for_book(book_id: &str) -> String {
        format!("reviews/book/{book_id}/user")
    }
}

pub mod borrow_requests {
    pub const GET_ALL: &str = "borrow-requests";
    pub const MY_REQUESTS: &str = "borrow-requests/my-requests";

    pub fn by_id(id: &str) -> String {
        format!("borrow-requests/{id}")
    }

    pub fn approve(id: &str) -> String {
        format!("borrow-requests/{id}/approve")
    }

    pub fn reject(id: &str) -> String {
        format!("borrow-requests/{id}/reject")
    }
}

pub mod borrow_records {
    pub const GET_ALL: &str = "borrow-records";
    pub const MY_RECORDS: &str = "borrow-records/my-records";
    pub const NOT_RETURNED: &str = "borrow-records/not-returned";

    pub fn by_id(id: &str) -> String {
        format!("borrow-records/{id}")
    }

    pub fn return_book(id: &str) -> String {
        format!("borrow-records/{id}/return")
    }

    pub fn for_book(book_id: &str) -> String {
        format!("borrow-records/book/{book_id}")
    }
}
