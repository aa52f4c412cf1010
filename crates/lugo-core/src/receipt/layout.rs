// ============================================================================
// Lugo Core - Receipt Layout
// File: crates/lugo-core/src/receipt/layout.rs
// Description: Receipt layout shared by every receipt renderer
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use lugo_shared::formatters::is_zero_currency;

use crate::error::DomainError;

pub const RECEIPT_TITLE: &str = "COMPROVANTE DE PAGAMENTO";

const MONTHS: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Everything printed on a receipt. Amounts arrive already formatted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReceiptData {
    /// `"1"` to `"12"`
    pub reference_month: String,
    pub reference_year: String,
    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,
    pub tenant_cpf: String,
    #[validate(length(min = 1, message = "Property name is required"))]
    pub property_name: String,
    pub property_address: String,
    pub rent_value: String,
    pub condo_value: Option<String>,
    pub iptu_value: Option<String>,
    pub other_value: Option<String>,
    pub total_value: String,
    pub payment_date: NaiveDate,
    pub observations: Option<String>,
}

impl ReceiptData {
    /// Reference month as `1..=12`.
    pub fn month_number(&self) -> Result<u32, DomainError> {
        self.reference_month
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| {
                DomainError::ValidationError(format!(
                    "Invalid reference month: {}",
                    self.reference_month
                ))
            })
    }

    pub fn year_number(&self) -> Result<i32, DomainError> {
        self.reference_year.trim().parse::<i32>().map_err(|_| {
            DomainError::ValidationError(format!("Invalid reference year: {}", self.reference_year))
        })
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// One block of the receipt, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutElement {
    Title(String),
    Subtitle(String),
    Field { label: String, value: String },
    Divider,
    Amount { label: String, value: String },
    Total { label: String, value: String },
    PaymentDate(String),
    Observations { heading: String, text: String },
    Footer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub elements: Vec<LayoutElement>,
}

fn field(label: &str, value: &str) -> LayoutElement {
    LayoutElement::Field { label: label.to_string(), value: value.to_string() }
}

fn amount(label: &str, value: &str) -> LayoutElement {
    LayoutElement::Amount { label: label.to_string(), value: value.to_string() }
}

impl ReceiptLayout {
    pub fn build(data: &ReceiptData, generated_at: NaiveDateTime) -> Result<Self, DomainError> {
        data.validate()?;
        let month = data.month_number()?;
        let year = data.year_number()?;
        let month = month_name(month).unwrap_or_default();

        let mut elements = vec![
            LayoutElement::Title(RECEIPT_TITLE.to_string()),
            LayoutElement::Subtitle(format!("Referente a {}/{}", month, year)),
            LayoutElement::Divider,
            field("Inquilino:", &data.tenant_name),
            field("CPF:", &data.tenant_cpf),
            field("Imóvel:", &data.property_name),
            field("Endereço:", &data.property_address),
            LayoutElement::Divider,
            amount("Aluguel", &data.rent_value),
        ];

        let optional = [
            ("Condomínio", &data.condo_value),
            ("IPTU", &data.iptu_value),
            ("Outros", &data.other_value),
        ];
        for (label, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !is_zero_currency(v)) {
                elements.push(amount(label, value));
            }
        }

        elements.push(LayoutElement::Divider);
        elements.push(LayoutElement::Total {
            label: "Total".to_string(),
            value: data.total_value.clone(),
        });
        elements.push(LayoutElement::PaymentDate(format!(
            "Data do pagamento: {}",
            data.payment_date.format("%d/%m/%Y")
        )));

        if let Some(text) = data.observations.as_deref().filter(|o| !o.trim().is_empty()) {
            elements.push(LayoutElement::Observations {
                heading: "Observações:".to_string(),
                text: text.to_string(),
            });
        }

        elements.push(LayoutElement::Footer(format!(
            "Comprovante gerado automaticamente via plataforma Lugo (Alugue Fácil) em {} às {}",
            generated_at.format("%d/%m/%Y"),
            generated_at.format("%H:%M:%S")
        )));

        Ok(Self { elements })
    }

    pub fn amount_labels(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                LayoutElement::Amount { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_total(&self) -> bool {
        self.elements.iter().any(|e| matches!(e, LayoutElement::Total { .. }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn sample_data() -> ReceiptData {
        ReceiptData {
            reference_month: "3".to_string(),
            reference_year: "2024".to_string(),
            tenant_name: "Maria da Silva".to_string(),
            tenant_cpf: "123.456.789-09".to_string(),
            property_name: "Apartamento Centro".to_string(),
            property_address: "Rua Augusta, 100 - Consolação, São Paulo/SP".to_string(),
            rent_value: "R$\u{a0}1.500,00".to_string(),
            condo_value: Some("R$\u{a0}300,00".to_string()),
            iptu_value: Some("R$\u{a0}0,00".to_string()),
            other_value: None,
            total_value: "R$\u{a0}1.800,00".to_string(),
            payment_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            observations: None,
        }
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(14, 30, 5).unwrap()
    }

    #[test]
    fn test_layout_order_and_subtitle() {
        let layout = ReceiptLayout::build(&sample_data(), generated_at()).unwrap();
        assert_eq!(layout.elements[0], LayoutElement::Title(RECEIPT_TITLE.to_string()));
        assert_eq!(layout.elements[1], LayoutElement::Subtitle("Referente a Março/2024".to_string()));
        assert!(matches!(layout.elements.last(), Some(LayoutElement::Footer(f)) if f.ends_with("em 06/03/2024 às 14:30:05")));
        assert!(layout
            .elements
            .contains(&LayoutElement::PaymentDate("Data do pagamento: 05/03/2024".to_string())));
    }

    #[test]
    fn test_zero_amounts_omitted_total_kept() {
        let layout = ReceiptLayout::build(&sample_data(), generated_at()).unwrap();
        assert_eq!(layout.amount_labels(), vec!["Aluguel", "Condomínio"]);
        assert!(layout.has_total());

        let mut data = sample_data();
        data.condo_value = Some("R$ 0,00".to_string());
        data.total_value = "R$ 0,00".to_string();
        let layout = ReceiptLayout::build(&data, generated_at()).unwrap();
        assert_eq!(layout.amount_labels(), vec!["Aluguel"]);
        assert!(layout.has_total());
    }

    #[test]
    fn test_observations_only_when_present() {
        let layout = ReceiptLayout::build(&sample_data(), generated_at()).unwrap();
        assert!(!layout.elements.iter().any(|e| matches!(e, LayoutElement::Observations { .. })));

        let mut data = sample_data();
        data.observations = Some("Pago via PIX".to_string());
        let layout = ReceiptLayout::build(&data, generated_at()).unwrap();
        assert!(layout.elements.iter().any(
            |e| matches!(e, LayoutElement::Observations { text, .. } if text == "Pago via PIX")
        ));
    }

    #[test]
    fn test_invalid_month_rejected() {
        let mut data = sample_data();
        data.reference_month = "13".to_string();
        assert!(matches!(
            ReceiptLayout::build(&data, generated_at()),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_invalid_year_rejected() {
        let mut data = sample_data();
        data.reference_year = "2O24".to_string();
        assert!(matches!(
            ReceiptLayout::build(&data, generated_at()),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
