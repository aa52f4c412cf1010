//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("CPF already registered")]
    CpfAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Property not found: {0}")]
    PropertyNotFound(Uuid),

    #[error("Tenant not found: {0}")]
    TenantNotFound(Uuid),

    #[error("Property {0} already has an active tenant")]
    ActiveTenantExists(Uuid),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
