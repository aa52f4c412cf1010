//! Owner dashboard summary.

use std::sync::Arc;
use serde::Serialize;

use lugo_security::Session;
use lugo_shared::constants::RECENT_PROPERTIES_LIMIT;

use crate::domain::Property;
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, ReceiptRepository, TenantRepository};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_properties: i64,
    pub active_tenants: i64,
    pub total_receipts: i64,
    pub recent_properties: Vec<Property>,
}

pub struct DashboardService {
    property_repo: Arc<dyn PropertyRepository>,
    tenant_repo: Arc<dyn TenantRepository>,
    receipt_repo: Arc<dyn ReceiptRepository>,
}

impl DashboardService {
    pub fn new(
        property_repo: Arc<dyn PropertyRepository>,
        tenant_repo: Arc<dyn TenantRepository>,
        receipt_repo: Arc<dyn ReceiptRepository>,
    ) -> Self {
        Self {
            property_repo,
            tenant_repo,
            receipt_repo,
        }
    }

    pub async fn summary(&self, session: &Session) -> Result<DashboardSummary, DomainError> {
        let owner = &session.user_id;
        Ok(DashboardSummary {
            total_properties: self.property_repo.count_by_owner(owner).await?,
            active_tenants: self.tenant_repo.count_active_by_owner(owner).await?,
            total_receipts: self.receipt_repo.count_by_owner(owner).await?,
            recent_properties: self
                .property_repo
                .find_recent_by_owner(owner, RECENT_PROPERTIES_LIMIT)
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockPropertyRepository, MockReceiptRepository, MockTenantRepository};
    use mockall::predicate::{always, eq};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_summary_counts_and_recent() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_count_by_owner().returning(|_| Ok(5));
        properties
            .expect_find_recent_by_owner()
            .with(always(), eq(3i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let mut tenants = MockTenantRepository::new();
        tenants.expect_count_active_by_owner().returning(|_| Ok(2));
        let mut receipts = MockReceiptRepository::new();
        receipts.expect_count_by_owner().returning(|_| Ok(7));

        let svc = DashboardService::new(Arc::new(properties), Arc::new(tenants), Arc::new(receipts));
        let session = Session::new(Uuid::new_v4(), "ana@example.com".to_string(), 600);
        let summary = svc.summary(&session).await.unwrap();
        assert_eq!(summary.total_properties, 5);
        assert_eq!(summary.active_tenants, 2);
        assert_eq!(summary.total_receipts, 7);
        assert!(summary.recent_properties.is_empty());
    }
}
