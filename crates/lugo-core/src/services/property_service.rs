// ============================================================================
// Lugo Core - Property Service
// File: crates/lugo-core/src/services/property_service.rs
// ============================================================================
//! Owner-side property management.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use lugo_security::Session;

use crate::domain::{Property, PropertyDraft, PropertyStatus};
use crate::error::DomainError;
use crate::repositories::PropertyRepository;

/// Loads a property and checks the session user owns it.
pub(crate) async fn load_owned(
    repo: &dyn PropertyRepository,
    session: &Session,
    property_id: &Uuid,
) -> Result<Property, DomainError> {
    let property = repo
        .find_by_id(property_id)
        .await?
        .ok_or(DomainError::PropertyNotFound(*property_id))?;

    if !property.is_owned_by(&session.user_id) {
        return Err(DomainError::Forbidden(format!(
            "Property {} belongs to another owner",
            property_id
        )));
    }
    Ok(property)
}

pub struct PropertyService {
    property_repo: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(property_repo: Arc<dyn PropertyRepository>) -> Self {
        Self { property_repo }
    }

    pub async fn create(&self, session: &Session, draft: PropertyDraft) -> Result<Property, DomainError> {
        let property = Property::new(session.user_id, draft)?;
        let created = self.property_repo.create(&property).await?;
        info!("Property {} created by {}", created.id, session.user_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        session: &Session,
        property_id: &Uuid,
        draft: PropertyDraft,
    ) -> Result<Property, DomainError> {
        let mut property = load_owned(self.property_repo.as_ref(), session, property_id).await?;
        property.apply(draft)?;
        let updated = self.property_repo.update(&property).await?;
        info!("Property {} updated", updated.id);
        Ok(updated)
    }

    pub async fn get_owned(&self, session: &Session, property_id: &Uuid) -> Result<Property, DomainError> {
        load_owned(self.property_repo.as_ref(), session, property_id).await
    }

    pub async fn list_own(&self, session: &Session) -> Result<Vec<Property>, DomainError> {
        self.property_repo.find_by_owner(&session.user_id).await
    }

    pub async fn set_status(
        &self,
        session: &Session,
        property_id: &Uuid,
        status: PropertyStatus,
    ) -> Result<(), DomainError> {
        load_owned(self.property_repo.as_ref(), session, property_id).await?;
        self.property_repo.update_status(property_id, status).await?;
        info!("Property {} status set to {}", property_id, status.as_str());
        Ok(())
    }

    pub async fn delete(&self, session: &Session, property_id: &Uuid) -> Result<(), DomainError> {
        load_owned(self.property_repo.as_ref(), session, property_id).await?;
        self.property_repo.delete(property_id).await?;
        info!("Property {} deleted", property_id);
        Ok(())
    }
}
