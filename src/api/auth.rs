//! Authentication and session management

use serde_json::Value;

use crate::{
    endpoints,
    error::{validate, ApiResult},
    http::response::SuccessResponse,
    http::ApiClient,
    models::auth::{
        ChangePasswordFirstTime, ForgotPassword, LoginRequest, LoginResponse, RegisterRequest,
        ResetPassword, VerifyResetOtp,
    },
};

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate and persist the returned token pair
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        validate(credentials)?;
        let envelope = self.client.post(endpoints::auth::LOGIN, credentials).await?;
        let session: LoginResponse = envelope.decode()?;
        self.client
            .store_session(&session.access_token, &session.refresh_token);
        tracing::debug!("session established");
        Ok(session)
    }

    /// Register a new member account
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<SuccessResponse> {
        validate(request)?;
        self.client.post(endpoints::auth::REGISTER, request).await
    }

    /// End the session server-side, then drop stored tokens regardless of
    /// whether the server call succeeded
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.client.post_empty(endpoints::auth::LOGOUT).await;
        self.client.clear_session();
        result.map(|_| ())
    }

    /// Replace the provisional password issued at account creation
    pub async fn change_password_first_time(
        &self,
        request: &ChangePasswordFirstTime,
    ) -> ApiResult<SuccessResponse> {
        validate(request)?;
        self.client
            .post(endpoints::auth::CHANGE_PASSWORD_FIRST_TIME, request)
            .await
    }

    /// Confirm an email address from a verification link token
    pub async fn verify_email(&self, token: &str) -> ApiResult<SuccessResponse> {
        self.client.get(&endpoints::auth::verify_email(token)).await
    }

    /// Request a password-reset code by email
    pub async fn forgot_password(&self, email: &str) -> ApiResult<SuccessResponse> {
        let request = ForgotPassword {
            email: email.to_string(),
        };
        validate(&request)?;
        self.client
            .post(endpoints::auth::FORGOT_PASSWORD, &request)
            .await
    }

    /// Check a password-reset code before accepting a new password
    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> ApiResult<SuccessResponse> {
        let request = VerifyResetOtp {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        validate(&request)?;
        self.client.post(endpoints::auth::VERIFY_OTP, &request).await
    }

    /// Complete the password-reset flow
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> ApiResult<Value> {
        let request = ResetPassword {
            email: email.to_string(),
            otp: otp.to_string(),
            new_password: new_password.to_string(),
        };
        validate(&request)?;
        let envelope = self
            .client
            .post(endpoints::auth::RESET_PASSWORD, &request)
            .await?;
        Ok(envelope.data)
    }
}
