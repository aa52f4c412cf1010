use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use lugo_core::error::DomainError;
use lugo_core::repositories::SessionStore;
use lugo_security::Session;

/// Process-local session store.
/// Expired sessions are dropped lazily on lookup or by [`Self::cleanup_expired`].
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        info!("Initializing in-memory session store");
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns number of sessions removed
    pub fn cleanup_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired());
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!("Cleaned up {} expired sessions", removed);
        }
        removed
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions.insert(session.id, session.clone());
        debug!("Stored session {}", session.id);
        Ok(())
    }

    async fn find(&self, id: &Uuid) -> Result<Option<Session>, DomainError> {
        let Some(entry) = self.sessions.get(id) else {
            return Ok(None);
        };
        let session = entry.value().clone();
        drop(entry);

        if session.is_expired() {
            self.sessions.remove(id);
            debug!("Session {} expired, removed from store", id);
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        self.sessions.remove(id);
        Ok(())
    }
}
