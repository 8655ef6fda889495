//! Authentication request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::User;

/// Login request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Login response: the session token pair plus the authenticated account
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Register request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// First-login password change request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ChangePasswordFirstTime {
    #[validate(length(min = 1, message = "Current password cannot be empty"))]
    pub old_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Password-reset flow: request an OTP by email
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ForgotPassword {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Password-reset flow: check the OTP before allowing a new password
#[derive(Debug, Clone, Serialize, Validate)]
pub struct VerifyResetOtp {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Code cannot be empty"))]
    pub otp: String,
}

/// Password-reset flow: set the new password
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ResetPassword {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Code cannot be empty"))]
    pub otp: String,
    #[serde(rename = "newPassword")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
