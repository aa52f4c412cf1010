// ============================================================================
// Lugo Infrastructure - PostgreSQL Profile Repository
// File: crates/lugo-infrastructure/src/database/postgres/profile_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use tracing::{info, warn};
use chrono::{DateTime, Utc};

use lugo_core::domain::Profile;
use lugo_core::error::DomainError;
use lugo_core::repositories::ProfileRepository;

use super::{db_error, violated_unique};

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            full_name: row.full_name,
            cpf: row.cpf,
            phone: row.phone,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, full_name, cpf, phone, created_at, modified_at
            FROM profiles
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding profile", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn upsert(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO profiles (id, full_name, cpf, phone, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                cpf = EXCLUDED.cpf,
                phone = EXCLUDED.phone,
                modified_at = EXCLUDED.modified_at
            RETURNING id, full_name, cpf, phone, created_at, modified_at
            "#
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(&profile.cpf)
        .bind(&profile.phone)
        .bind(profile.created_at)
        .bind(profile.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_unique(&e).as_deref() == Some("profiles_cpf_key") {
                warn!("CPF already used by another profile");
                DomainError::CpfAlreadyExists
            } else {
                db_error("saving profile", e)
            }
        })?;

        info!("Profile saved: {}", row.id);
        Ok(row.into())
    }
}
