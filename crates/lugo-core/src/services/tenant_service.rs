//! Tenant registration and lease history.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use lugo_security::Session;

use crate::domain::{PropertyStatus, Tenant, TenantDraft};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, TenantRepository};
use crate::services::property_service::load_owned;

pub struct TenantService {
    property_repo: Arc<dyn PropertyRepository>,
    tenant_repo: Arc<dyn TenantRepository>,
}

impl TenantService {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, tenant_repo: Arc<dyn TenantRepository>) -> Self {
        Self {
            property_repo,
            tenant_repo,
        }
    }

    /// Starts a lease. A property holds at most one active tenant and is
    /// marked `alugado` once the tenant is stored.
    pub async fn register(
        &self,
        session: &Session,
        property_id: &Uuid,
        draft: TenantDraft,
    ) -> Result<Tenant, DomainError> {
        let property = load_owned(self.property_repo.as_ref(), session, property_id).await?;

        if let Some(active) = self.tenant_repo.find_active_by_property(&property.id).await? {
            warn!("Property {} already leased to tenant {}", property.id, active.id);
            return Err(DomainError::ActiveTenantExists(property.id));
        }

        let tenant = Tenant::new(property.id, session.user_id, draft)?;
        let created = self.tenant_repo.create(&tenant).await?;
        self.property_repo
            .update_status(&property.id, PropertyStatus::Alugado)
            .await?;

        info!("Tenant {} registered for property {}", created.id, property.id);
        Ok(created)
    }

    pub async fn history(&self, session: &Session, property_id: &Uuid) -> Result<Vec<Tenant>, DomainError> {
        load_owned(self.property_repo.as_ref(), session, property_id).await?;
        self.tenant_repo.find_by_property(property_id).await
    }
}
