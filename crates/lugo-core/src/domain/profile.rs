//! Owner profile and user account entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use lugo_shared::validators::{only_digits, validate_phone_field, validate_tax_id_field};

/// Login account. Stands in for the hosted auth user table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Public-facing owner data. Shares its id with [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Mandatory data an owner must fill in before listing properties.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 2, max = 150, message = "Name must have at least 2 characters"))]
    pub full_name: String,

    #[validate(custom(function = "validate_tax_id_field"))]
    pub cpf: String,

    #[validate(custom(function = "validate_phone_field"))]
    pub phone: String,
}

impl Profile {
    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            full_name: None,
            cpf: None,
            phone: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.cpf, &self.phone]
            .iter()
            .all(|field| field.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false))
    }

    /// Applies a validated update; documents are stored digit-only.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), validator::ValidationErrors> {
        update.validate()?;
        self.full_name = Some(update.full_name.trim().to_string());
        self.cpf = Some(only_digits(&update.cpf));
        self.phone = Some(only_digits(&update.phone));
        self.modified_at = Some(Utc::now());
        Ok(())
    }

    pub fn display_name(&self) -> String {
        self.full_name.clone().unwrap_or_else(|| "Proprietário".to_string())
    }

    /// Phone digits for `wa.me` links, empty when unknown.
    pub fn whatsapp(&self) -> String {
        self.phone.as_deref().map(only_digits).unwrap_or_default()
    }
}
