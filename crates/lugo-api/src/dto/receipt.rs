//! Receipt bodies keep the camelCase shape the web client sends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lugo_core::receipt::ReceiptData;
use lugo_core::services::ReceiptRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDataDto {
    pub reference_month: String,
    pub reference_year: String,
    pub tenant_name: String,
    #[serde(default)]
    pub tenant_cpf: String,
    pub property_name: String,
    #[serde(default)]
    pub property_address: String,
    pub rent_value: String,
    pub condo_value: Option<String>,
    pub iptu_value: Option<String>,
    pub other_value: Option<String>,
    pub total_value: String,
    pub payment_date: NaiveDate,
    pub observations: Option<String>,
}

impl From<ReceiptDataDto> for ReceiptData {
    fn from(dto: ReceiptDataDto) -> Self {
        ReceiptData {
            reference_month: dto.reference_month,
            reference_year: dto.reference_year,
            tenant_name: dto.tenant_name,
            tenant_cpf: dto.tenant_cpf,
            property_name: dto.property_name,
            property_address: dto.property_address,
            rent_value: dto.rent_value,
            condo_value: dto.condo_value,
            iptu_value: dto.iptu_value,
            other_value: dto.other_value,
            total_value: dto.total_value,
            payment_date: dto.payment_date,
            observations: dto.observations,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReceiptBody {
    pub data: ReceiptDataDto,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
}

impl From<GenerateReceiptBody> for ReceiptRequest {
    fn from(body: GenerateReceiptBody) -> Self {
        ReceiptRequest {
            data: body.data.into(),
            user_id: body.user_id,
            property_id: body.property_id,
            tenant_id: body.tenant_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReceiptResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_buffer: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateReceiptResponse {
    pub fn ok(pdf_url: String, pdf_buffer: Vec<u8>) -> Self {
        Self {
            success: true,
            pdf_url: Some(pdf_url),
            pdf_buffer: Some(pdf_buffer),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            pdf_url: None,
            pdf_buffer: None,
            error: Some(error),
        }
    }
}
