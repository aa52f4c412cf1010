use serde::{Deserialize, Serialize};
use validator::Validate;

use lugo_core::domain::User;
use lugo_shared::validators::{validate_email_field, validate_password_field};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    #[validate(custom(function = "validate_password_field"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Unix seconds
    pub expires_at: i64,
    pub user: User,
}
