// ============================================================================
// Lugo Core - Lease Service
// File: crates/lugo-core/src/services/lease_service.rs
// Description: Lease termination cascade
// ============================================================================
//! Ending a lease removes every receipt of the active tenant (stored PDFs
//! and rows), deactivates the tenant and makes the property available again.
//!
//! The steps run in order and stop at the first failure. Nothing already
//! done is undone, so a failure halfway leaves partial state behind.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use lugo_security::Session;

use crate::domain::{PropertyStatus, Tenant};
use crate::error::DomainError;
use crate::repositories::{ObjectStorage, PropertyRepository, ReceiptRepository, TenantRepository};
use crate::services::property_service::load_owned;

/// What a termination touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaseTermination {
    pub property_id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub receipts_removed: u64,
    pub files_removed: usize,
}

pub struct LeaseService {
    property_repo: Arc<dyn PropertyRepository>,
    tenant_repo: Arc<dyn TenantRepository>,
    receipt_repo: Arc<dyn ReceiptRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl LeaseService {
    pub fn new(
        property_repo: Arc<dyn PropertyRepository>,
        tenant_repo: Arc<dyn TenantRepository>,
        receipt_repo: Arc<dyn ReceiptRepository>,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self {
            property_repo,
            tenant_repo,
            receipt_repo,
            storage,
        }
    }

    pub async fn terminate_lease(&self, session: &Session, property_id: &Uuid) -> Result<LeaseTermination, DomainError> {
        self.terminate_on(session, property_id, Local::now().date_naive()).await
    }

    /// Ends the current lease so a new tenant can be registered.
    pub async fn change_tenant(&self, session: &Session, property_id: &Uuid) -> Result<LeaseTermination, DomainError> {
        let termination = self.terminate_lease(session, property_id).await?;
        info!("Property {} ready for a new tenant", property_id);
        Ok(termination)
    }

    async fn terminate_on(
        &self,
        session: &Session,
        property_id: &Uuid,
        today: NaiveDate,
    ) -> Result<LeaseTermination, DomainError> {
        load_owned(self.property_repo.as_ref(), session, property_id).await?;

        let mut termination = LeaseTermination {
            property_id: *property_id,
            tenant_id: None,
            receipts_removed: 0,
            files_removed: 0,
        };

        match self.tenant_repo.find_active_by_property(property_id).await? {
            Some(tenant) => {
                self.end_tenancy(&tenant, today, &mut termination).await?;
            }
            None => debug!("Property {} has no active tenant", property_id),
        }

        self.property_repo
            .update_status(property_id, PropertyStatus::Disponivel)
            .await?;

        info!(
            "Lease terminated on property {}: {} receipts, {} files removed",
            property_id, termination.receipts_removed, termination.files_removed
        );
        Ok(termination)
    }

    async fn end_tenancy(
        &self,
        tenant: &Tenant,
        today: NaiveDate,
        termination: &mut LeaseTermination,
    ) -> Result<(), DomainError> {
        termination.tenant_id = Some(tenant.id);

        let receipts = self.receipt_repo.find_by_tenant(&tenant.id).await?;

        let paths: Vec<String> = receipts
            .iter()
            .filter_map(|r| r.pdf_url.as_deref())
            .filter_map(|url| {
                let path = self.storage.object_path(url);
                if path.is_none() {
                    warn!("Skipping receipt URL outside the bucket: {}", url);
                }
                path
            })
            .collect();

        if !paths.is_empty() {
            self.storage.remove(&paths).await?;
            termination.files_removed = paths.len();
        }

        termination.receipts_removed = self.receipt_repo.delete_by_tenant(&tenant.id).await?;
        self.tenant_repo.deactivate(&tenant.id, today).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::tests::sample_draft as property_draft;
    use crate::domain::tenant::tests::sample_draft as tenant_draft;
    use crate::domain::{Property, Receipt};
    use crate::repositories::{
        MockObjectStorage, MockPropertyRepository, MockReceiptRepository, MockTenantRepository,
    };
    use crate::storage_paths::storage_path_from_url;
    use chrono::Utc;
    use mockall::predicate::eq;
    use mockall::Sequence;

    const BUCKET: &str = "imoveis-fotos";

    fn session() -> Session {
        Session::new(Uuid::new_v4(), "ana@example.com".to_string(), 600)
    }

    fn properties_for(property: Property) -> MockPropertyRepository {
        let mut repo = MockPropertyRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(property.clone())));
        repo
    }

    fn storage_resolving_paths() -> MockObjectStorage {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_object_path()
            .returning(|url| storage_path_from_url(url, BUCKET));
        storage
    }

    fn receipt(tenant: &Tenant, url: Option<&str>) -> Receipt {
        Receipt {
            id: Uuid::new_v4(),
            owner_id: tenant.owner_id,
            property_id: tenant.property_id,
            tenant_id: tenant.id,
            reference_month: 3,
            reference_year: 2024,
            total_value: 1500.0,
            payment_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            pdf_url: url.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_no_active_tenant_still_resets_property() {
        let session = session();
        let property = Property::new(session.user_id, property_draft()).unwrap();
        let property_id = property.id;

        let mut properties = properties_for(property);
        properties
            .expect_update_status()
            .with(eq(property_id), eq(PropertyStatus::Disponivel))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_active_by_property().returning(|_| Ok(None));
        tenants.expect_deactivate().never();

        let mut receipts = MockReceiptRepository::new();
        receipts.expect_find_by_tenant().never();
        let mut storage = MockObjectStorage::new();
        storage.expect_remove().never();

        let svc = LeaseService::new(
            Arc::new(properties),
            Arc::new(tenants),
            Arc::new(receipts),
            Arc::new(storage),
        );
        let result = svc.terminate_lease(&session, &property_id).await.unwrap();
        assert_eq!(result.tenant_id, None);
        assert_eq!(result.receipts_removed, 0);
        assert_eq!(result.files_removed, 0);
    }

    #[tokio::test]
    async fn test_cascade_removes_files_rows_and_tenant() {
        let session = session();
        let property = Property::new(session.user_id, property_draft()).unwrap();
        let property_id = property.id;
        let tenant = Tenant::new(property_id, session.user_id, tenant_draft()).unwrap();
        let tenant_id = tenant.id;
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let stored = vec![
            receipt(&tenant, Some(&format!(
                "https://x.supabase.co/storage/v1/object/public/{}/{}/{}/comprovantes/1-Maria.pdf",
                BUCKET, session.user_id, property_id
            ))),
            receipt(&tenant, Some("https://cdn.example.com/elsewhere/2.pdf")),
            receipt(&tenant, None),
        ];
        let expected_path = format!("{}/{}/comprovantes/1-Maria.pdf", session.user_id, property_id);

        let mut seq = Sequence::new();
        let mut properties = properties_for(property);
        let mut tenants = MockTenantRepository::new();
        let mut receipts = MockReceiptRepository::new();
        let mut storage = storage_resolving_paths();

        let active = tenant.clone();
        tenants
            .expect_find_active_by_property()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(active.clone())));
        receipts
            .expect_find_by_tenant()
            .with(eq(tenant_id))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(stored.clone()));
        storage
            .expect_remove()
            .withf(move |paths| paths.len() == 1 && paths[0] == expected_path)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        receipts
            .expect_delete_by_tenant()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(3));
        tenants
            .expect_deactivate()
            .with(eq(tenant_id), eq(today))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        properties
            .expect_update_status()
            .with(eq(property_id), eq(PropertyStatus::Disponivel))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let svc = LeaseService::new(
            Arc::new(properties),
            Arc::new(tenants),
            Arc::new(receipts),
            Arc::new(storage),
        );
        let result = svc.terminate_on(&session, &property_id, today).await.unwrap();
        assert_eq!(
            result,
            LeaseTermination {
                property_id,
                tenant_id: Some(tenant_id),
                receipts_removed: 3,
                files_removed: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_storage_failure_stops_cascade() {
        let session = session();
        let property = Property::new(session.user_id, property_draft()).unwrap();
        let property_id = property.id;
        let tenant = Tenant::new(property_id, session.user_id, tenant_draft()).unwrap();
        let url = format!(
            "https://x.supabase.co/storage/v1/object/public/{}/{}/a.pdf",
            BUCKET, session.user_id
        );
        let stored = vec![receipt(&tenant, Some(&url))];

        let mut properties = properties_for(property);
        properties.expect_update_status().never();
        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_active_by_property()
            .returning(move |_| Ok(Some(tenant.clone())));
        tenants.expect_deactivate().never();
        let mut receipts = MockReceiptRepository::new();
        receipts.expect_find_by_tenant().returning(move |_| Ok(stored.clone()));
        receipts.expect_delete_by_tenant().never();
        let mut storage = storage_resolving_paths();
        storage
            .expect_remove()
            .returning(|_| Err(DomainError::StorageError("bucket unavailable".to_string())));

        let svc = LeaseService::new(
            Arc::new(properties),
            Arc::new(tenants),
            Arc::new(receipts),
            Arc::new(storage),
        );
        let err = svc.terminate_lease(&session, &property_id).await.unwrap_err();
        assert!(matches!(err, DomainError::StorageError(_)));
    }

    #[tokio::test]
    async fn test_terminate_requires_owner() {
        let property = Property::new(Uuid::new_v4(), property_draft()).unwrap();
        let property_id = property.id;
        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_active_by_property().never();

        let svc = LeaseService::new(
            Arc::new(properties_for(property)),
            Arc::new(tenants),
            Arc::new(MockReceiptRepository::new()),
            Arc::new(MockObjectStorage::new()),
        );
        assert!(matches!(
            svc.change_tenant(&session(), &property_id).await,
            Err(DomainError::Forbidden(_))
        ));
    }
}
