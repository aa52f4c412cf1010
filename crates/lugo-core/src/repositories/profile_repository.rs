//! Profile repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Profile;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Profile>, DomainError>;
    /// Inserts or replaces the profile. A CPF owned by another profile
    /// yields [`DomainError::CpfAlreadyExists`].
    async fn upsert(&self, profile: &Profile) -> Result<Profile, DomainError>;
}
