//! Explicit user session.
//!
//! A session is created on sign-in and handed to every request handler that
//! needs an authenticated user. It stops being valid when it is removed from
//! the session store (sign-out) or when `expires_at` passes.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: i64,
    pub expires_at: i64,
}

impl Session {
    pub fn new(user_id: Uuid, email: String, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            user_id,
            email,
            created_at: now,
            expires_at: now + ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now().timestamp()
    }

    /// Seconds left before expiry, zero once expired.
    pub fn remaining_ttl(&self) -> i64 {
        (self.expires_at - Utc::now().timestamp()).max(0)
    }

    pub fn belongs_to(&self, user_id: &Uuid) -> bool {
        &self.user_id == user_id
    }
}
