//! Tenant repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use crate::domain::Tenant;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError>;
    async fn find_active_by_property(&self, property_id: &Uuid) -> Result<Option<Tenant>, DomainError>;
    /// Lease history, most recent start date first.
    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Tenant>, DomainError>;
    async fn count_active_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError>;
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;
    /// Marks the tenant `inativo` with the given end date.
    async fn deactivate(&self, id: &Uuid, end_date: NaiveDate) -> Result<(), DomainError>;
}
