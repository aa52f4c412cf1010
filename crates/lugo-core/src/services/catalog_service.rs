//! Public, unauthenticated views: an owner's catalog and a property page.

use std::sync::Arc;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Property, PropertyStatus};
use crate::error::DomainError;
use crate::repositories::{ProfileRepository, PropertyRepository};

/// Owner catalog page
#[derive(Debug, Clone, Serialize)]
pub struct OwnerCatalog {
    pub owner_id: Uuid,
    pub owner_name: String,
    /// Digits only, empty when the owner has no phone.
    pub owner_phone: String,
    pub properties: Vec<Property>,
}

/// Property page with the contact of its owner
#[derive(Debug, Clone, Serialize)]
pub struct PublicProperty {
    pub property: Property,
    pub owner_name: String,
    pub owner_phone: String,
}

pub struct CatalogService {
    property_repo: Arc<dyn PropertyRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
}

impl CatalogService {
    pub fn new(property_repo: Arc<dyn PropertyRepository>, profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            property_repo,
            profile_repo,
        }
    }

    pub async fn owner_catalog(&self, owner_id: &Uuid) -> Result<OwnerCatalog, DomainError> {
        let profile = self
            .profile_repo
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(*owner_id))?;

        let properties = self
            .property_repo
            .find_by_owner_and_status(owner_id, PropertyStatus::Disponivel)
            .await?;
        debug!("Catalog of {}: {} available properties", owner_id, properties.len());

        Ok(OwnerCatalog {
            owner_id: profile.id,
            owner_name: profile.display_name(),
            owner_phone: profile.whatsapp(),
            properties,
        })
    }

    pub async fn property_page(&self, property_id: &Uuid) -> Result<PublicProperty, DomainError> {
        let property = self
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(DomainError::PropertyNotFound(*property_id))?;

        let owner = self.profile_repo.find_by_id(&property.owner_id).await?;
        let (owner_name, owner_phone) = match owner {
            Some(profile) => (profile.display_name(), profile.whatsapp()),
            None => (String::new(), String::new()),
        };

        Ok(PublicProperty {
            property,
            owner_name,
            owner_phone,
        })
    }
}
