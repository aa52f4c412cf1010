// ============================================================================
// Lugo Core - Property Entity
// File: crates/lugo-core/src/domain/property.rs
// Description: Rental property with address, pricing and availability
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use lugo_shared::validators::{only_digits, validate_postal_code_field};

/// Property availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Disponivel,
    Alugado,
    Manutencao,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Disponivel => "disponivel",
            PropertyStatus::Alugado => "alugado",
            PropertyStatus::Manutencao => "manutencao",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "disponivel" => Some(PropertyStatus::Disponivel),
            "alugado" => Some(PropertyStatus::Alugado),
            "manutencao" => Some(PropertyStatus::Manutencao),
            _ => None,
        }
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::Disponivel
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1, max = 200, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, max = 20, message = "Number is required"))]
    pub number: String,

    #[validate(length(max = 100, message = "Complement too long"))]
    pub complement: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Neighborhood is required"))]
    pub neighborhood: String,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    #[validate(length(equal = 2, message = "State must be the two-letter code"))]
    pub state: String,

    #[validate(custom(function = "validate_postal_code_field"))]
    pub zip_code: Option<String>,
}

impl Address {
    /// `Rua X, 10 - Centro, Cidade/UF`
    pub fn one_line(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if let Some(complement) = self.complement.as_deref().filter(|c| !c.trim().is_empty()) {
            line.push_str(&format!(" ({})", complement));
        }
        line.push_str(&format!(" - {}, {}/{}", self.neighborhood, self.city, self.state));
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PropertyDetails {
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0.0))]
    pub area_m2: Option<f64>,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub accepts_pets: bool,
    #[validate(range(min = 1, max = 100))]
    pub max_people: Option<i32>,
    #[serde(default = "default_true")]
    pub accepts_children: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Pricing {
    #[validate(range(min = 0.0, message = "Rent cannot be negative"))]
    pub rent: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Condominium cannot be negative"))]
    pub condominium: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "IPTU cannot be negative"))]
    pub iptu: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Service fee cannot be negative"))]
    pub service_fee: f64,
}

impl Pricing {
    pub fn total_monthly(&self) -> f64 {
        self.rent + self.condominium + self.iptu + self.service_fee
    }
}

/// Utilities included in the rent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inclusions {
    #[serde(default)]
    pub water: bool,
    #[serde(default)]
    pub electricity: bool,
    #[serde(default)]
    pub internet: bool,
    #[serde(default)]
    pub gas: bool,
}

/// Owner-provided fields of a property, used for create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PropertyDraft {
    #[validate(length(max = 150, message = "Title too long"))]
    pub title: Option<String>,

    #[validate(length(max = 50, message = "Kind too long"))]
    pub kind: Option<String>,

    #[validate(nested)]
    pub address: Address,

    #[serde(default)]
    #[validate(nested)]
    pub details: PropertyDetails,

    #[serde(default)]
    pub rooms: Vec<String>,

    #[validate(nested)]
    pub pricing: Pricing,

    #[serde(default)]
    pub included: Inclusions,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: Option<String>,

    #[serde(default)]
    pub photos: Vec<String>,

    pub status: Option<PropertyStatus>,
}

/// Property entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub address: Address,
    pub details: PropertyDetails,
    pub rooms: Vec<String>,
    pub pricing: Pricing,
    pub included: Inclusions,
    pub description: Option<String>,
    pub photos: Vec<String>,
    pub status: PropertyStatus,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn new(owner_id: Uuid, draft: PropertyDraft) -> Result<Self, validator::ValidationErrors> {
        draft.validate()?;
        let draft = draft.normalized();

        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            title: draft.title,
            kind: draft.kind,
            address: draft.address,
            details: draft.details,
            rooms: draft.rooms,
            pricing: draft.pricing,
            included: draft.included,
            description: draft.description,
            photos: draft.photos,
            status: draft.status.unwrap_or_default(),
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    /// Replaces every owner-editable field. The status is kept unless the
    /// draft names one.
    pub fn apply(&mut self, draft: PropertyDraft) -> Result<(), validator::ValidationErrors> {
        draft.validate()?;
        let draft = draft.normalized();

        self.title = draft.title;
        self.kind = draft.kind;
        self.address = draft.address;
        self.details = draft.details;
        self.rooms = draft.rooms;
        self.pricing = draft.pricing;
        self.included = draft.included;
        self.description = draft.description;
        self.photos = draft.photos;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.modified_at = Some(Utc::now());
        Ok(())
    }

    pub fn set_status(&mut self, status: PropertyStatus) {
        self.status = status;
        self.modified_at = Some(Utc::now());
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        &self.owner_id == user_id
    }

    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Disponivel
    }

    /// Title, falling back to `"{street}, {number}"`.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("{}, {}", self.address.street, self.address.number),
        }
    }
}

impl PropertyDraft {
    fn normalized(mut self) -> Self {
        self.title = self.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        self.address.street = self.address.street.trim().to_string();
        self.address.state = self.address.state.trim().to_uppercase();
        self.address.zip_code = self.address.zip_code.map(|z| only_digits(&z));
        self.rooms = self
            .rooms
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn sample_draft() -> PropertyDraft {
        PropertyDraft {
            title: Some("  Apartamento Centro ".to_string()),
            kind: Some("apartamento".to_string()),
            address: Address {
                street: "Rua Augusta".to_string(),
                number: "100".to_string(),
                complement: None,
                neighborhood: "Consolação".to_string(),
                city: "São Paulo".to_string(),
                state: "sp".to_string(),
                zip_code: Some("01310-100".to_string()),
            },
            details: PropertyDetails::default(),
            rooms: vec!["Sala".to_string(), " ".to_string()],
            pricing: Pricing { rent: 1500.0, condominium: 300.0, iptu: 80.0, service_fee: 0.0 },
            included: Inclusions::default(),
            description: None,
            photos: vec![],
            status: None,
        }
    }

    #[test]
    fn test_create_property_normalizes_draft() {
        let property = Property::new(Uuid::new_v4(), sample_draft()).unwrap();
        assert_eq!(property.title.as_deref(), Some("Apartamento Centro"));
        assert_eq!(property.address.state, "SP");
        assert_eq!(property.address.zip_code.as_deref(), Some("01310100"));
        assert_eq!(property.rooms, vec!["Sala".to_string()]);
        assert_eq!(property.status, PropertyStatus::Disponivel);
        assert_eq!(property.pricing.total_monthly(), 1880.0);
    }

    #[test]
    fn test_invalid_cep_rejected() {
        let mut draft = sample_draft();
        draft.address.zip_code = Some("123".to_string());
        assert!(Property::new(Uuid::new_v4(), draft).is_err());
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut draft = sample_draft();
        draft.pricing.rent = -1.0;
        assert!(Property::new(Uuid::new_v4(), draft).is_err());
    }

    #[test]
    fn test_display_title_fallback() {
        let mut draft = sample_draft();
        draft.title = Some("   ".to_string());
        let property = Property::new(Uuid::new_v4(), draft).unwrap();
        assert_eq!(property.display_title(), "Rua Augusta, 100");
    }

    #[test]
    fn test_status_roundtrip_strings() {
        for status in [PropertyStatus::Disponivel, PropertyStatus::Alugado, PropertyStatus::Manutencao] {
            assert_eq!(PropertyStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(PropertyStatus::from_str("vendido"), None);
    }
}
