//! Session store trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use lugo_security::Session;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), DomainError>;
    async fn find(&self, id: &Uuid) -> Result<Option<Session>, DomainError>;
    async fn remove(&self, id: &Uuid) -> Result<(), DomainError>;
}
