//! Property repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Property, PropertyStatus};
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError>;
    /// Newest first.
    async fn find_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Property>, DomainError>;
    /// Properties of `owner_id` in `status`, newest first.
    async fn find_by_owner_and_status(
        &self,
        owner_id: &Uuid,
        status: PropertyStatus,
    ) -> Result<Vec<Property>, DomainError>;
    async fn find_recent_by_owner(&self, owner_id: &Uuid, limit: i64) -> Result<Vec<Property>, DomainError>;
    async fn count_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError>;
    async fn create(&self, property: &Property) -> Result<Property, DomainError>;
    async fn update(&self, property: &Property) -> Result<Property, DomainError>;
    async fn update_status(&self, id: &Uuid, status: PropertyStatus) -> Result<(), DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
