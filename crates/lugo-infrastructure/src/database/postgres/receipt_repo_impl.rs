// ============================================================================
// Lugo Infrastructure - PostgreSQL Receipt Repository
// File: crates/lugo-infrastructure/src/database/postgres/receipt_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use tracing::info;
use chrono::{DateTime, NaiveDate, Utc};

use lugo_core::domain::Receipt;
use lugo_core::error::DomainError;
use lugo_core::repositories::ReceiptRepository;

use super::db_error;

pub struct PgReceiptRepository {
    pool: PgPool,
}

impl PgReceiptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReceiptRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub reference_month: i32,
    pub reference_year: i32,
    pub total_value: f64,
    pub payment_date: NaiveDate,
    pub pdf_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReceiptRow> for Receipt {
    fn from(row: ReceiptRow) -> Self {
        Receipt {
            id: row.id,
            owner_id: row.owner_id,
            property_id: row.property_id,
            tenant_id: row.tenant_id,
            reference_month: row.reference_month,
            reference_year: row.reference_year,
            total_value: row.total_value,
            payment_date: row.payment_date,
            pdf_url: row.pdf_url,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ReceiptRepository for PgReceiptRepository {
    async fn find_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Receipt>, DomainError> {
        let rows: Vec<ReceiptRow> = sqlx::query_as(
            r#"
            SELECT
                id, owner_id, property_id, tenant_id, reference_month, reference_year,
                total_value, payment_date, pdf_url, created_at
            FROM receipts
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing receipts by tenant", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM receipts WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting receipts", e))
    }

    async fn create(&self, receipt: &Receipt) -> Result<Receipt, DomainError> {
        let row: ReceiptRow = sqlx::query_as(
            r#"
            INSERT INTO receipts (
                id, owner_id, property_id, tenant_id, reference_month, reference_year,
                total_value, payment_date, pdf_url, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                id, owner_id, property_id, tenant_id, reference_month, reference_year,
                total_value, payment_date, pdf_url, created_at
            "#
        )
        .bind(receipt.id)
        .bind(receipt.owner_id)
        .bind(receipt.property_id)
        .bind(receipt.tenant_id)
        .bind(receipt.reference_month)
        .bind(receipt.reference_year)
        .bind(receipt.total_value)
        .bind(receipt.payment_date)
        .bind(&receipt.pdf_url)
        .bind(receipt.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating receipt", e))?;

        info!("Receipt row created: {}", row.id);
        Ok(row.into())
    }

    async fn delete_by_tenant(&self, tenant_id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM receipts WHERE tenant_id = $1")
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting receipts", e))?;

        Ok(result.rows_affected())
    }
}
