//! PostgreSQL repository implementations

pub mod property_repo_impl;
pub mod tenant_repo_impl;
pub mod receipt_repo_impl;
pub mod profile_repo_impl;
pub mod user_repo_impl;

pub use property_repo_impl::PgPropertyRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use receipt_repo_impl::PgReceiptRepository;
pub use profile_repo_impl::PgProfileRepository;
pub use user_repo_impl::PgUserRepository;

use lugo_core::error::DomainError;
use tracing::error;

/// Logs a query failure and wraps it for the domain.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

/// Name of the unique constraint a failed insert/update violated, if any.
pub(crate) fn violated_unique(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .filter(|d| d.is_unique_violation())
        .and_then(|d| d.constraint().map(str::to_string))
}
