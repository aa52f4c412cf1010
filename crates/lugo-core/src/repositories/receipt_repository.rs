//! Receipt repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Receipt;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    async fn find_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Receipt>, DomainError>;
    async fn count_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError>;
    async fn create(&self, receipt: &Receipt) -> Result<Receipt, DomainError>;
    /// Returns the number of deleted rows.
    async fn delete_by_tenant(&self, tenant_id: &Uuid) -> Result<u64, DomainError>;
}
