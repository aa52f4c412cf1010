// ============================================================================
// Lugo Core - Tenant Entity
// File: crates/lugo-core/src/domain/tenant.rs
// Description: Tenant leasing exactly one property
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use lugo_shared::validators::{
    only_digits, validate_email_field, validate_phone_field, validate_tax_id_field,
};

/// Lease status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Ativo,
    Inativo,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Ativo => "ativo",
            TenantStatus::Inativo => "inativo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ativo" => Some(TenantStatus::Ativo),
            "inativo" => Some(TenantStatus::Inativo),
            _ => None,
        }
    }
}

impl Default for TenantStatus {
    fn default() -> Self {
        TenantStatus::Ativo
    }
}

/// Owner-provided fields for a new lease.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TenantDraft {
    #[validate(length(min = 2, max = 150, message = "Name must be between 2 and 150 characters"))]
    pub full_name: String,

    #[validate(custom(function = "validate_tax_id_field"))]
    pub cpf: String,

    #[validate(custom(function = "validate_phone_field"))]
    pub phone: String,

    #[validate(custom(function = "validate_email_field"))]
    pub email: Option<String>,

    #[validate(range(min = 0.0, message = "Rent cannot be negative"))]
    pub rent_value: f64,

    pub start_date: NaiveDate,
}

/// Tenant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub property_id: Uuid,
    pub owner_id: Uuid,
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    pub email: Option<String>,
    pub rent_value: f64,
    pub status: TenantStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(
        property_id: Uuid,
        owner_id: Uuid,
        draft: TenantDraft,
    ) -> Result<Self, validator::ValidationErrors> {
        draft.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            property_id,
            owner_id,
            full_name: draft.full_name.trim().to_string(),
            cpf: only_digits(&draft.cpf),
            phone: only_digits(&draft.phone),
            email: draft.email.map(|e| e.trim().to_lowercase()),
            rent_value: draft.rent_value,
            status: TenantStatus::Ativo,
            start_date: draft.start_date,
            end_date: None,
            created_at: Utc::now(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Ativo
    }

    /// The only lease transition: active → inactive, ending today.
    pub fn terminate(&mut self, today: NaiveDate) {
        self.status = TenantStatus::Inativo;
        self.end_date = Some(today);
    }
}
