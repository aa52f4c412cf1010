//! Owner profile: read and complete.

use std::sync::Arc;
use tracing::info;

use lugo_security::Session;

use crate::domain::{Profile, ProfileUpdate};
use crate::error::DomainError;
use crate::repositories::ProfileRepository;

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn get_own(&self, session: &Session) -> Result<Profile, DomainError> {
        self.profile_repo
            .find_by_id(&session.user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(session.user_id))
    }

    /// Fills the mandatory owner data. A profile row is created when the
    /// account has none yet.
    pub async fn complete(&self, session: &Session, update: ProfileUpdate) -> Result<Profile, DomainError> {
        let mut profile = self
            .profile_repo
            .find_by_id(&session.user_id)
            .await?
            .unwrap_or_else(|| Profile::empty(session.user_id));

        profile.apply(update)?;
        let saved = self.profile_repo.upsert(&profile).await?;

        info!("Profile completed for user {}", session.user_id);
        Ok(saved)
    }
}
