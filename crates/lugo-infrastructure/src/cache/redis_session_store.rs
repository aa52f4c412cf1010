// ============================================================================
// Lugo Infrastructure - Redis Session Store
// File: crates/lugo-infrastructure/src/cache/redis_session_store.rs
// ============================================================================

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Pool, PoolConfig, Runtime};
use tracing::{debug, error, warn};
use uuid::Uuid;

use lugo_core::error::DomainError;
use lugo_core::repositories::SessionStore;
use lugo_security::Session;
use lugo_shared::config::RedisSettings;

const KEY_PREFIX: &str = "lugo:session:";

/// Sessions shared between server instances. Entries carry a Redis TTL
/// equal to the session's remaining lifetime.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

fn session_key(id: &Uuid) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

fn store_error(action: &str, e: impl std::fmt::Display) -> DomainError {
    error!("Redis session {} failed: {}", action, e);
    DomainError::SessionStoreError(format!("{}: {}", action, e))
}

impl RedisSessionStore {
    pub fn new(settings: &RedisSettings) -> Result<Self, DomainError> {
        let mut config = Config::from_url(settings.url.clone());
        config.pool = Some(PoolConfig::new(settings.max_connections as usize));
        let pool = config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| store_error("pool creation", e))?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, DomainError> {
        self.pool.get().await.map_err(|e| store_error("connection", e))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let ttl = session.remaining_ttl();
        if ttl == 0 {
            warn!("Refusing to store expired session {}", session.id);
            return Err(DomainError::SessionExpired);
        }
        let payload = serde_json::to_string(session).map_err(|e| store_error("encode", e))?;

        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(session_key(&session.id), payload, ttl as u64)
            .await
            .map_err(|e| store_error("save", e))?;
        debug!("Stored session {} for {}s", session.id, ttl);
        Ok(())
    }

    async fn find(&self, id: &Uuid) -> Result<Option<Session>, DomainError> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .get(session_key(id))
            .await
            .map_err(|e| store_error("find", e))?;

        payload
            .map(|raw| serde_json::from_str::<Session>(&raw).map_err(|e| store_error("decode", e)))
            .transpose()
    }

    async fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(session_key(id))
            .await
            .map_err(|e| store_error("remove", e))?;
        Ok(())
    }
}
