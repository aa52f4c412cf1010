// ============================================================================
// Lugo Infrastructure - PostgreSQL Property Repository
// File: crates/lugo-infrastructure/src/database/postgres/property_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use tracing::info;
use chrono::{DateTime, Utc};

use lugo_core::domain::{Address, Inclusions, Pricing, Property, PropertyDetails, PropertyStatus};
use lugo_core::error::DomainError;
use lugo_core::repositories::PropertyRepository;

use super::db_error;

const PROPERTY_COLUMNS: &str = r#"
    id, owner_id, title, kind,
    street, number, complement, neighborhood, city, state, zip_code,
    bedrooms, bathrooms, area_m2, has_garage, accepts_pets, max_people, accepts_children,
    rooms, rent, condominium, iptu, service_fee,
    water_included, electricity_included, internet_included, gas_included,
    description, photos, status, created_at, modified_at
"#;

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PropertyRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area_m2: Option<f64>,
    pub has_garage: bool,
    pub accepts_pets: bool,
    pub max_people: Option<i32>,
    pub accepts_children: bool,
    pub rooms: Vec<String>,
    pub rent: f64,
    pub condominium: f64,
    pub iptu: f64,
    pub service_fee: f64,
    pub water_included: bool,
    pub electricity_included: bool,
    pub internet_included: bool,
    pub gas_included: bool,
    pub description: Option<String>,
    pub photos: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            kind: row.kind,
            address: Address {
                street: row.street,
                number: row.number,
                complement: row.complement,
                neighborhood: row.neighborhood,
                city: row.city,
                state: row.state,
                zip_code: row.zip_code,
            },
            details: PropertyDetails {
                bedrooms: row.bedrooms,
                bathrooms: row.bathrooms,
                area_m2: row.area_m2,
                has_garage: row.has_garage,
                accepts_pets: row.accepts_pets,
                max_people: row.max_people,
                accepts_children: row.accepts_children,
            },
            rooms: row.rooms,
            pricing: Pricing {
                rent: row.rent,
                condominium: row.condominium,
                iptu: row.iptu,
                service_fee: row.service_fee,
            },
            included: Inclusions {
                water: row.water_included,
                electricity: row.electricity_included,
                internet: row.internet_included,
                gas: row.gas_included,
            },
            description: row.description,
            photos: row.photos,
            status: PropertyStatus::from_str(&row.status).unwrap_or_default(),
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM properties WHERE id = $1",
            PROPERTY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding property by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Property>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing properties by owner", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_owner_and_status(
        &self,
        owner_id: &Uuid,
        status: PropertyStatus,
    ) -> Result<Vec<Property>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM properties WHERE owner_id = $1 AND status = $2 ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        ))
        .bind(owner_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing properties by status", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_recent_by_owner(&self, owner_id: &Uuid, limit: i64) -> Result<Vec<Property>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM properties WHERE owner_id = $1 ORDER BY created_at DESC LIMIT $2",
            PROPERTY_COLUMNS
        ))
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing recent properties", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count_by_owner(&self, owner_id: &Uuid) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting properties", e))
    }

    async fn create(&self, property: &Property) -> Result<Property, DomainError> {
        let row: PropertyRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO properties (
                id, owner_id, title, kind,
                street, number, complement, neighborhood, city, state, zip_code,
                bedrooms, bathrooms, area_m2, has_garage, accepts_pets, max_people, accepts_children,
                rooms, rent, condominium, iptu, service_fee,
                water_included, electricity_included, internet_included, gas_included,
                description, photos, status, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32)
            RETURNING {}
            "#,
            PROPERTY_COLUMNS
        ))
        .bind(property.id)
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.kind)
        .bind(&property.address.street)
        .bind(&property.address.number)
        .bind(&property.address.complement)
        .bind(&property.address.neighborhood)
        .bind(&property.address.city)
        .bind(&property.address.state)
        .bind(&property.address.zip_code)
        .bind(property.details.bedrooms)
        .bind(property.details.bathrooms)
        .bind(property.details.area_m2)
        .bind(property.details.has_garage)
        .bind(property.details.accepts_pets)
        .bind(property.details.max_people)
        .bind(property.details.accepts_children)
        .bind(&property.rooms)
        .bind(property.pricing.rent)
        .bind(property.pricing.condominium)
        .bind(property.pricing.iptu)
        .bind(property.pricing.service_fee)
        .bind(property.included.water)
        .bind(property.included.electricity)
        .bind(property.included.internet)
        .bind(property.included.gas)
        .bind(&property.description)
        .bind(&property.photos)
        .bind(property.status.as_str())
        .bind(property.created_at)
        .bind(property.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating property", e))?;

        info!("Property row created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, property: &Property) -> Result<Property, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(&format!(
            r#"
            UPDATE properties
            SET
                title = $2, kind = $3,
                street = $4, number = $5, complement = $6, neighborhood = $7,
                city = $8, state = $9, zip_code = $10,
                bedrooms = $11, bathrooms = $12, area_m2 = $13, has_garage = $14,
                accepts_pets = $15, max_people = $16, accepts_children = $17,
                rooms = $18, rent = $19, condominium = $20, iptu = $21, service_fee = $22,
                water_included = $23, electricity_included = $24,
                internet_included = $25, gas_included = $26,
                description = $27, photos = $28, status = $29, modified_at = $30
            WHERE id = $1
            RETURNING {}
            "#,
            PROPERTY_COLUMNS
        ))
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.kind)
        .bind(&property.address.street)
        .bind(&property.address.number)
        .bind(&property.address.complement)
        .bind(&property.address.neighborhood)
        .bind(&property.address.city)
        .bind(&property.address.state)
        .bind(&property.address.zip_code)
        .bind(property.details.bedrooms)
        .bind(property.details.bathrooms)
        .bind(property.details.area_m2)
        .bind(property.details.has_garage)
        .bind(property.details.accepts_pets)
        .bind(property.details.max_people)
        .bind(property.details.accepts_children)
        .bind(&property.rooms)
        .bind(property.pricing.rent)
        .bind(property.pricing.condominium)
        .bind(property.pricing.iptu)
        .bind(property.pricing.service_fee)
        .bind(property.included.water)
        .bind(property.included.electricity)
        .bind(property.included.internet)
        .bind(property.included.gas)
        .bind(&property.description)
        .bind(&property.photos)
        .bind(property.status.as_str())
        .bind(property.modified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating property", e))?;

        row.map(|r| r.into())
            .ok_or(DomainError::PropertyNotFound(property.id))
    }

    async fn update_status(&self, id: &Uuid, status: PropertyStatus) -> Result<(), DomainError> {
        sqlx::query("UPDATE properties SET status = $2, modified_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("updating property status", e))?;

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting property", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PropertyNotFound(*id));
        }
        Ok(())
    }
}
