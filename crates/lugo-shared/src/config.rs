//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_MAX_PHOTO_SIZE_MB, DEFAULT_SESSION_TTL,
    DEFAULT_STORAGE_BUCKET,
};

/// Placeholder secret shipped in `config/default.toml`.
const DEV_JWT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub jwt: JwtSettings,
    pub session: SessionSettings,
    pub storage: StorageSettings,
    pub uploads: UploadSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub backend: SessionBackend,
    pub ttl_seconds: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub base_url: String,
    pub bucket: String,
    pub service_key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub max_photo_size_mb: u64,
    pub allowed_types: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "lugo-server")?
            .set_default("app.cors_origin", "http://localhost:3000")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.run_migrations", false)?
            .set_default("redis.url", "redis://127.0.0.1:6379")?
            .set_default("redis.max_connections", 8)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("session.backend", "memory")?
            .set_default("session.ttl_seconds", DEFAULT_SESSION_TTL)?
            .set_default("storage.bucket", DEFAULT_STORAGE_BUCKET)?
            .set_default("storage.timeout_seconds", 30)?
            .set_default("uploads.max_photo_size_mb", DEFAULT_MAX_PHOTO_SIZE_MB)?
            .set_default("uploads.allowed_types", vec!["image/"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("uploads.allowed_types")
                    .try_parsing(true),
            )
            .build()?;
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        info!("Configuration loaded for {} environment", settings.app.env);
        Ok(settings)
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(AppError::InvalidConfig("jwt.secret is required".to_string()));
        }
        if self.is_production() && self.jwt.secret == DEV_JWT_SECRET {
            return Err(AppError::InvalidConfig(
                "jwt.secret must be changed in production".to_string(),
            ));
        }
        if self.storage.base_url.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage.base_url is required".to_string()));
        }
        if self.session.ttl_seconds <= 0 {
            return Err(AppError::InvalidConfig("session.ttl_seconds must be positive".to_string()));
        }
        if self.uploads.max_photo_size_mb == 0 {
            return Err(AppError::InvalidConfig(
                "uploads.max_photo_size_mb must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}
