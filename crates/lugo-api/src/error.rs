//! API error type and its mapping to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use lugo_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Internal(String),
}

/// Field name to the messages of its failed rules.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    collect_field_messages(errors, "", &mut fields);
    fields
}

fn collect_field_messages(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, Vec<String>>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = list
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(name, messages);
            }
            ValidationErrorsKind::Struct(inner) => collect_field_messages(inner, &name, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_messages(inner, &format!("{}[{}]", name, index), out);
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::Unauthorized(msg) => {
                warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }
            ApiError::Forbidden(msg) => {
                warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            ApiError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            ApiError::Validation(errors) => {
                let details = serde_json::to_value(field_messages(errors)).ok();
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    details,
                )
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone(), None)
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ApiResponse::<()>::error_with_details(code, &message, details);
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized(_) | DomainError::SessionExpired => {
                ApiError::Unauthorized(err.to_string())
            }
            DomainError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::EmailAlreadyExists(_)
            | DomainError::CpfAlreadyExists
            | DomainError::ActiveTenantExists(_) => ApiError::Conflict(err.to_string()),
            DomainError::UserNotFound
            | DomainError::ProfileNotFound(_)
            | DomainError::PropertyNotFound(_)
            | DomainError::TenantNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::WeakPassword(msg) | DomainError::ValidationError(msg) => {
                ApiError::BadRequest(msg)
            }
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::RenderError(_)
            | DomainError::StorageError(_)
            | DomainError::SessionStoreError(_)
            | DomainError::DatabaseError(_)
            | DomainError::InternalError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 2, message = "Name too short"))]
        name: String,
        #[validate(range(min = 0.0))]
        rent: f64,
    }

    #[test]
    fn test_domain_errors_map_to_status() {
        let cases = [
            (DomainError::SessionExpired, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (DomainError::PropertyNotFound(Uuid::nil()), StatusCode::NOT_FOUND),
            (DomainError::ActiveTenantExists(Uuid::nil()), StatusCode::CONFLICT),
            (DomainError::CpfAlreadyExists, StatusCode::CONFLICT),
            (DomainError::WeakPassword("short".into()), StatusCode::BAD_REQUEST),
            (DomainError::StorageError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).into_response().status(), status);
        }
    }

    #[test]
    fn test_validation_details_per_field() {
        let errors = Form { name: "a".into(), rent: -1.0 }.validate().unwrap_err();
        let fields = field_messages(&errors);
        assert_eq!(fields["name"], vec!["Name too short".to_string()]);
        assert_eq!(fields["rent"], vec!["range".to_string()]);
    }
}
