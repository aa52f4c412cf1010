// ============================================================================
// Lugo Infrastructure - PostgreSQL Tenant Repository
// File: crates/lugo-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use tracing::{info, warn};
use chrono::{DateTime, NaiveDate, Utc};

use lugo_core::domain::{Tenant, TenantStatus};
use lugo_core::error::DomainError;
use lugo_core::repositories::TenantRepository;

use super::{db_error, violated_unique};

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub owner_id: Uuid,
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    pub email: Option<String>,
    pub rent_value: f64,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Unknown values read as inactive.
fn parse_status(raw: &str, tenant_id: &Uuid) -> TenantStatus {
    TenantStatus::from_str(raw).unwrap_or_else(|| {
        warn!("Unknown status {:?} on tenant {}, treating as inativo", raw, tenant_id);
        TenantStatus::Inativo
    })
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            property_id: row.property_id,
            owner_id: row.owner_id,
            full_name: row.full_name,
            cpf: row.cpf,
            phone: row.phone,
            email: row.email,
            rent_value: row.rent_value,
            status: parse_status(&row.status, &row.id),
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, owner_id, full_name, cpf, phone, email,
                rent_value, status, start_date, end_date, created_at
            FROM tenants
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding tenant by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_active_by_property(&self, property_id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, owner_id, full_name, cpf, phone, email,
                rent_value, status, start_date, end_date, created_at
            FROM tenants
            WHERE property_id = $1 AND status = 'ativo'
            LIMIT 1
            "#
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding active tenant", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_property(&self, property_id: &Uuid) -> Result<Vec<Tenant>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT
                id, property_id, owner_id, full_name, cpf, phone, email,
                rent_value, status, start_date, end_date, created_at
            FROM tenants
            WHERE property_id = $1
            ORDER BY start_date DESC
            "#
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing tenant history", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_active_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tenants WHERE owner_id = $1 AND status = 'ativo'")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting active tenants", e))
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let row: TenantRow = sqlx::query_as(
            r#"
            INSERT INTO tenants (
                id, property_id, owner_id, full_name, cpf, phone, email,
                rent_value, status, start_date, end_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING
                id, property_id, owner_id, full_name, cpf, phone, email,
                rent_value, status, start_date, end_date, created_at
            "#
        )
        .bind(tenant.id)
        .bind(tenant.property_id)
        .bind(tenant.owner_id)
        .bind(&tenant.full_name)
        .bind(&tenant.cpf)
        .bind(&tenant.phone)
        .bind(&tenant.email)
        .bind(tenant.rent_value)
        .bind(tenant.status.as_str())
        .bind(tenant.start_date)
        .bind(tenant.end_date)
        .bind(tenant.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A concurrent registration loses against the one-active-tenant index.
            if violated_unique(&e).as_deref() == Some("idx_tenants_one_active") {
                DomainError::ActiveTenantExists(tenant.property_id)
            } else {
                db_error("creating tenant", e)
            }
        })?;

        info!("Tenant row created: {}", row.id);
        Ok(row.into())
    }

    async fn deactivate(&self, id: &Uuid, end_date: NaiveDate) -> Result<(), DomainError> {
        sqlx::query("UPDATE tenants SET status = 'inativo', end_date = $2 WHERE id = $1")
            .bind(id)
            .bind(end_date)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deactivating tenant", e))?;

        Ok(())
    }
}
