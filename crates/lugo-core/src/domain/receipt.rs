//! Receipt record persisted after a PDF is generated and stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
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
