// ============================================================================
// Lugo Core - Receipt Service
// File: crates/lugo-core/src/services/receipt_service.rs
// Description: Receipt rendering, storage and bookkeeping
// ============================================================================

use std::sync::Arc;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use lugo_security::Session;
use lugo_shared::constants::RECEIPT_CONTENT_TYPE;
use lugo_shared::formatters::parse_currency;
use lugo_shared::types::now_millis;

use crate::domain::Receipt;
use crate::error::DomainError;
use crate::receipt::{HtmlReceiptRenderer, ReceiptData, ReceiptLayout, ReceiptRenderer};
use crate::repositories::{ObjectStorage, PropertyRepository, ReceiptRepository, TenantRepository};
use crate::services::property_service::load_owned;
use crate::storage_paths::receipt_object_path;

/// Receipt generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    pub data: ReceiptData,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
}

/// Stored receipt with the rendered document
#[derive(Debug, Clone)]
pub struct GeneratedReceipt {
    pub receipt: Receipt,
    pub pdf_url: String,
    pub pdf_bytes: Vec<u8>,
}

pub struct ReceiptService {
    property_repo: Arc<dyn PropertyRepository>,
    tenant_repo: Arc<dyn TenantRepository>,
    receipt_repo: Arc<dyn ReceiptRepository>,
    storage: Arc<dyn ObjectStorage>,
    renderer: Arc<dyn ReceiptRenderer>,
    preview: HtmlReceiptRenderer,
}

impl ReceiptService {
    pub fn new(
        property_repo: Arc<dyn PropertyRepository>,
        tenant_repo: Arc<dyn TenantRepository>,
        receipt_repo: Arc<dyn ReceiptRepository>,
        storage: Arc<dyn ObjectStorage>,
        renderer: Arc<dyn ReceiptRenderer>,
    ) -> Self {
        Self {
            property_repo,
            tenant_repo,
            receipt_repo,
            storage,
            renderer,
            preview: HtmlReceiptRenderer::new(),
        }
    }

    /// Renders the receipt, stores it without overwriting and records it.
    pub async fn generate(&self, session: &Session, request: ReceiptRequest) -> Result<GeneratedReceipt, DomainError> {
        if request.user_id != session.user_id {
            return Err(DomainError::Unauthorized(
                "Receipt requested for another user".to_string(),
            ));
        }

        let property = load_owned(self.property_repo.as_ref(), session, &request.property_id).await?;
        let tenant = self
            .tenant_repo
            .find_by_id(&request.tenant_id)
            .await?
            .filter(|t| t.property_id == property.id)
            .ok_or(DomainError::TenantNotFound(request.tenant_id))?;

        let data = &request.data;
        let reference_month = data.month_number()? as i32;
        let reference_year = data.year_number()?;
        let layout = ReceiptLayout::build(data, Local::now().naive_local())?;
        let pdf_bytes = self.renderer.render(&layout)?;

        let path = receipt_object_path(&session.user_id, &property.id, now_millis(), &data.tenant_name);
        self.storage
            .upload(&path, pdf_bytes.clone(), RECEIPT_CONTENT_TYPE, false)
            .await
            .map_err(|e| {
                error!("Receipt upload failed for {}: {}", path, e);
                e
            })?;
        let pdf_url = self.storage.public_url(&path);

        let receipt = Receipt {
            id: Uuid::new_v4(),
            owner_id: session.user_id,
            property_id: property.id,
            tenant_id: tenant.id,
            reference_month,
            reference_year,
            total_value: parse_currency(&data.total_value),
            payment_date: data.payment_date,
            pdf_url: Some(pdf_url.clone()),
            created_at: Utc::now(),
        };
        let receipt = self.receipt_repo.create(&receipt).await?;

        info!("Receipt {} stored at {}", receipt.id, path);
        Ok(GeneratedReceipt {
            receipt,
            pdf_url,
            pdf_bytes,
        })
    }

    /// HTML rendering of the same layout. Nothing is stored.
    pub fn preview(&self, data: &ReceiptData) -> Result<String, DomainError> {
        let layout = ReceiptLayout::build(data, Local::now().naive_local())?;
        Ok(self.preview.render_string(&layout))
    }
}
